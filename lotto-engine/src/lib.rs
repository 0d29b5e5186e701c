//! Classement des numéros 1..=45 à partir de l'historique des tirages, et génération de
//! grilles équilibrées (recherche exhaustive ou tirage pondéré).
//!
//! Aucune entrée/sortie : l'historique est fourni par l'appelant, du plus récent au plus ancien.

pub mod balance;
pub mod best;
pub mod combinatorics;
pub mod config;
pub mod input;
pub mod ranking;
pub mod sampler;
pub mod scoring;

pub use balance::{is_balanced, Combination};
pub use best::best_combinations;
pub use config::{load_config, BalanceConfig, EngineConfig};
pub use input::parse_pick;
pub use ranking::{rank_numbers, RankedEntry, Ranking};
pub use sampler::{weighted_random_combinations, Preferences};
pub use scoring::{compute_scores, NumberScore, RawDetails, ScoreBoard};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Days, NaiveDate};
    use lotto_db::models::{Draw, POOL_SIZE};

    use crate::scoring::{NumberScore, ScoreBoard};

    pub fn draw(round: u32, numbers: [u8; 6]) -> Draw {
        let first = NaiveDate::from_ymd_opt(2002, 12, 7).unwrap();
        Draw {
            round,
            numbers,
            bonus: 45,
            date: first + Days::new(7 * round.saturating_sub(1) as u64),
        }
    }

    /// Historique synthétique varié, du plus récent au plus ancien.
    pub fn make_test_draws(n: usize) -> Vec<Draw> {
        (0..n)
            .map(|i| {
                let mut numbers = [0u8; 6];
                for (k, slot) in numbers.iter_mut().enumerate() {
                    *slot = ((i * 7 + k * 8) % 45 + 1) as u8;
                }
                numbers.sort();
                draw((n - i) as u32, numbers)
            })
            .collect()
    }

    /// Tableau de scores dont seul le total compte : `totals[n - 1]` pour le numéro `n`.
    pub fn board_from_totals(totals: [f64; POOL_SIZE]) -> ScoreBoard {
        let mut records = [NumberScore::default(); POOL_SIZE];
        for (i, record) in records.iter_mut().enumerate() {
            record.number = (i + 1) as u8;
            record.frequency = totals[i];
            record.total = totals[i];
        }
        ScoreBoard::from_records(records)
    }
}

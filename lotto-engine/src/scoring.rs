//! Score composite par numéro : fréquence globale, numéros chauds et transitions de Markov.
//!
//! `draws[0]` est toujours le tirage le plus récent.

use lotto_db::models::{Draw, POOL_SIZE};
use serde::Serialize;

use crate::config::EngineConfig;

/// Comptages bruts ayant servi au calcul du score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RawDetails {
    pub total_appearance: u32,
    pub recent_appearance: u32,
    pub markov_raw: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumberScore {
    pub number: u8,
    pub frequency: f64,
    pub hot: f64,
    pub markov: f64,
    pub total: f64,
    pub details: RawDetails,
}

/// Scores des numéros 1..=45, indexés par `numéro - 1`. Vide si l'historique est vide.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    records: Option<[NumberScore; POOL_SIZE]>,
}

impl ScoreBoard {
    pub fn empty() -> Self {
        Self { records: None }
    }

    pub fn from_records(records: [NumberScore; POOL_SIZE]) -> Self {
        Self { records: Some(records) }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_none()
    }

    /// Enregistrements dans l'ordre croissant des numéros.
    pub fn records(&self) -> &[NumberScore] {
        match &self.records {
            Some(records) => records,
            None => &[],
        }
    }

    pub fn get(&self, number: u8) -> Option<&NumberScore> {
        let idx = (number as usize).checked_sub(1)?;
        self.records.as_ref()?.get(idx)
    }

    pub fn total(&self, number: u8) -> f64 {
        self.get(number).map_or(0.0, |s| s.total)
    }
}

type TransitionMatrix = [[u32; POOL_SIZE]; POOL_SIZE];

fn idx(n: u8) -> usize {
    (n - 1) as usize
}

fn count_appearances<'a>(draws: impl Iterator<Item = &'a Draw>) -> [u32; POOL_SIZE] {
    let mut counts = [0u32; POOL_SIZE];
    for draw in draws {
        for &n in &draw.numbers {
            counts[idx(n)] += 1;
        }
    }
    counts
}

fn min_max(values: &[u32]) -> (u32, u32) {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    (min, max)
}

/// `transition[from][to]` : nombre de fois où `from`, présent dans un tirage, a été suivi
/// de `to` dans le tirage suivant. Produit cartésien complet, `from == to` inclus.
pub fn transition_counts(draws: &[Draw]) -> Box<TransitionMatrix> {
    let mut transition = Box::new([[0u32; POOL_SIZE]; POOL_SIZE]);
    for i in 1..draws.len() {
        let earlier = &draws[i];
        let later = &draws[i - 1];
        for &from in &earlier.numbers {
            for &to in &later.numbers {
                transition[idx(from)][idx(to)] += 1;
            }
        }
    }
    transition
}

/// Somme des transitions depuis les numéros du dernier tirage vers chaque candidat.
fn markov_raw(draws: &[Draw]) -> [u32; POOL_SIZE] {
    let mut raw = [0u32; POOL_SIZE];
    let Some(latest) = draws.first() else {
        return raw;
    };
    let transition = transition_counts(draws);
    for (j, slot) in raw.iter_mut().enumerate() {
        *slot = latest.numbers.iter().map(|&from| transition[idx(from)][j]).sum();
    }
    raw
}

pub fn compute_scores(draws: &[Draw], config: &EngineConfig) -> ScoreBoard {
    if draws.is_empty() {
        return ScoreBoard::empty();
    }

    let freq = count_appearances(draws.iter());
    let (min_f, max_f) = min_max(&freq);

    let hot = count_appearances(draws.iter().take(config.hot_window.min(draws.len())));
    let (_, max_h) = min_max(&hot);

    let markov = markov_raw(draws);
    let (min_m, max_m) = min_max(&markov);

    log::debug!(
        "Scores sur {} tirages : fréquence [{min_f}, {max_f}], chauds max {max_h}, markov [{min_m}, {max_m}]",
        draws.len()
    );

    let mut records = [NumberScore::default(); POOL_SIZE];
    for (i, record) in records.iter_mut().enumerate() {
        // Min-max pour la fréquence et Markov, division par le max pour les chauds.
        let frequency = if max_f > min_f {
            (freq[i] - min_f) as f64 / (max_f - min_f) as f64 * config.frequency_weight
        } else {
            config.frequency_weight / 2.0
        };
        let hot_score = if max_h > 0 {
            hot[i] as f64 / max_h as f64 * config.hot_weight
        } else {
            0.0
        };
        let markov_score = if max_m > min_m {
            (markov[i] - min_m) as f64 / (max_m - min_m) as f64 * config.markov_weight
        } else {
            0.0
        };

        *record = NumberScore {
            number: (i + 1) as u8,
            frequency,
            hot: hot_score,
            markov: markov_score,
            total: frequency + hot_score + markov_score,
            details: RawDetails {
                total_appearance: freq[i],
                recent_appearance: hot[i],
                markov_raw: markov[i],
            },
        };
    }

    ScoreBoard::from_records(records)
}

use lotto_db::models::{is_valid_number, POOL_SIZE, PICK_COUNT};
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::balance::{is_balanced, sort_and_rank, Combination};
use crate::config::EngineConfig;
use crate::scoring::ScoreBoard;

/// Numéro favori (toujours présent, poids multiplié) et numéro exclu (retiré du tirage pondéré).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub liked: Option<u8>,
    pub disliked: Option<u8>,
}

/// Poids entiers des numéros 1..=45 (index = numéro - 1) : `max(1, floor(total))`,
/// multiplié pour le favori, 0 pour l'exclu. L'exclusion s'applique même si
/// l'exclu est aussi le favori.
pub fn candidate_weights(board: &ScoreBoard, prefs: &Preferences, config: &EngineConfig) -> [u32; POOL_SIZE] {
    let mut weights = [0u32; POOL_SIZE];
    for score in board.records() {
        if prefs.disliked == Some(score.number) {
            continue;
        }
        let mut weight = (score.total.floor() as u32).max(1);
        if prefs.liked == Some(score.number) {
            weight *= config.liked_multiplier;
        }
        weights[(score.number - 1) as usize] = weight;
    }
    weights
}

pub fn weighted_random_combinations(
    board: &ScoreBoard,
    prefs: &Preferences,
    config: &EngineConfig,
    seed: Option<u64>,
) -> Vec<Combination> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    weighted_random_combinations_with_rng(board, prefs, config, &mut rng)
}

/// Échantillonnage par rejet : au plus `max_attempts` grilles tirées, chacune acceptée si
/// elle est équilibrée et nouvelle. Peut renvoyer moins de `result_count` grilles.
pub fn weighted_random_combinations_with_rng<R: Rng + ?Sized>(
    board: &ScoreBoard,
    prefs: &Preferences,
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<Combination> {
    if board.is_empty() {
        return Vec::new();
    }

    let prefs = &Preferences {
        liked: prefs.liked.filter(|&n| is_valid_number(n)),
        disliked: prefs.disliked.filter(|&n| is_valid_number(n)),
    };
    let weights = candidate_weights(board, prefs, config);
    let seeded = prefs.liked.filter(|&n| weights[(n - 1) as usize] == 0);
    let available = weights.iter().filter(|&&w| w > 0).count() + seeded.map_or(0, |_| 1);
    if available < PICK_COUNT {
        log::warn!("Seulement {available} numéros tirables, impossible de former une grille");
        return Vec::new();
    }

    let dist = match WeightedIndex::new(&weights) {
        Ok(dist) => dist,
        Err(e) => {
            log::warn!("Poids invalides pour le tirage pondéré : {e}");
            return Vec::new();
        }
    };

    let mut results: Vec<Combination> = Vec::with_capacity(config.result_count);
    let mut attempts = 0usize;

    while results.len() < config.result_count && attempts < config.max_attempts {
        attempts += 1;

        let mut selected: Vec<u8> = Vec::with_capacity(PICK_COUNT);
        if let Some(liked) = prefs.liked {
            selected.push(liked);
        }
        while selected.len() < PICK_COUNT {
            let pick = (dist.sample(rng) + 1) as u8;
            if !selected.contains(&pick) {
                selected.push(pick);
            }
        }

        let mut numbers = [0u8; PICK_COUNT];
        numbers.copy_from_slice(&selected);
        numbers.sort();

        if !is_balanced(&numbers, &config.balance) {
            continue;
        }
        if results.iter().any(|c| c.numbers == numbers) {
            continue;
        }
        results.push(Combination::new(numbers, |n| board.total(n)));
    }

    if results.len() < config.result_count {
        log::warn!(
            "Budget épuisé après {attempts} essais : {}/{} grilles trouvées",
            results.len(),
            config.result_count
        );
    } else {
        log::debug!("{} grilles trouvées en {attempts} essais", results.len());
    }

    sort_and_rank(&mut results, config.result_count);
    results
}

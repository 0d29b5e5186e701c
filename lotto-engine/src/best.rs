//! Recherche exhaustive des meilleures grilles équilibrées parmi les numéros les mieux classés.
//!
//! Le coût est C(P, 6) évaluations pour un vivier de taille P (54 264 pour P = 21). C'est
//! acceptable tant que le vivier reste autour de 20 numéros ; au-delà, la croissance est
//! combinatoire.

use lotto_db::models::{is_valid_number, POOL_SIZE, PICK_COUNT};

use crate::balance::{is_balanced, sort_and_rank, Combination};
use crate::combinatorics::IndexCombinations;
use crate::config::EngineConfig;
use crate::ranking::Ranking;

/// Vivier de candidats : les `candidate_pool` premiers du classement, plus le numéro imposé
/// s'il n'y figure pas déjà.
pub fn candidate_pool(ranking: &Ranking, required: Option<u8>, config: &EngineConfig) -> Vec<u8> {
    let mut pool: Vec<u8> = ranking
        .top(config.candidate_pool)
        .iter()
        .map(|e| e.number)
        .collect();
    if let Some(n) = required {
        if !pool.contains(&n) {
            pool.push(n);
        }
    }
    pool
}

pub fn best_combinations(ranking: &Ranking, required: Option<u8>, config: &EngineConfig) -> Vec<Combination> {
    if ranking.is_empty() {
        return Vec::new();
    }
    let required = required.filter(|&n| is_valid_number(n));

    let mut totals = [0.0f64; POOL_SIZE + 1];
    for entry in ranking.entries() {
        totals[entry.number as usize] = entry.score.total;
    }

    let pool = candidate_pool(ranking, required, config);

    let mut combinations = Vec::new();
    let mut enumerated = 0usize;
    for indices in IndexCombinations::<PICK_COUNT>::new(pool.len()) {
        enumerated += 1;
        let mut numbers = indices.map(|i| pool[i]);
        if !is_balanced(&numbers, &config.balance) {
            continue;
        }
        if let Some(n) = required {
            if !numbers.contains(&n) {
                continue;
            }
        }
        numbers.sort();
        combinations.push(Combination::new(numbers, |n| totals[n as usize]));
    }

    log::debug!(
        "Recherche exhaustive : vivier {}, {} sous-ensembles, {} grilles retenues",
        pool.len(),
        enumerated,
        combinations.len()
    );

    sort_and_rank(&mut combinations, config.result_count);
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rank_numbers;
    use crate::scoring::compute_scores;
    use crate::test_support::{board_from_totals, make_test_draws};

    fn descending_totals() -> [f64; 45] {
        // 1 est le mieux classé, 45 le moins bien.
        let mut totals = [0.0; 45];
        for (i, t) in totals.iter_mut().enumerate() {
            *t = 90.0 - 2.0 * i as f64;
        }
        totals
    }

    /// 13..=32 en tête du classement (13 premier), mélange de bas et de hauts.
    fn mixed_totals() -> [f64; 45] {
        let mut totals = [0.0; 45];
        for (i, t) in totals.iter_mut().enumerate() {
            let n = i as f64 + 1.0;
            *t = if (13.0..=32.0).contains(&n) { 100.0 - 2.0 * (n - 13.0) } else { 20.0 - 0.1 * n };
        }
        totals
    }

    #[test]
    fn test_empty_ranking_gives_nothing() {
        let ranking = Ranking::default();
        assert!(best_combinations(&ranking, None, &EngineConfig::default()).is_empty());
        assert!(best_combinations(&ranking, Some(7), &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_pool_appends_required_number() {
        let ranking = rank_numbers(&board_from_totals(descending_totals()));
        let config = EngineConfig::default();

        let pool = candidate_pool(&ranking, None, &config);
        assert_eq!(pool, (1..=20).collect::<Vec<u8>>());

        let pool = candidate_pool(&ranking, Some(40), &config);
        assert_eq!(pool.len(), 21);
        assert_eq!(pool[20], 40);

        let pool = candidate_pool(&ranking, Some(5), &config);
        assert_eq!(pool.len(), 20);
    }

    #[test]
    fn test_results_are_balanced_sorted_and_ranked() {
        let draws = make_test_draws(120);
        let config = EngineConfig::default();
        let ranking = rank_numbers(&compute_scores(&draws, &config));
        let combos = best_combinations(&ranking, None, &config);

        assert_eq!(combos.len(), 5);
        let pool = candidate_pool(&ranking, None, &config);
        for (i, combo) in combos.iter().enumerate() {
            assert_eq!(combo.rank, i + 1);
            assert!(is_balanced(&combo.numbers, &config.balance));
            assert!(combo.numbers.windows(2).all(|w| w[0] < w[1]));
            assert!(combo.numbers.iter().all(|n| pool.contains(n)));
            let expected: f64 = combo.numbers.iter().map(|&n| ranking.get(n).unwrap().score.total).sum();
            assert!((combo.score - expected).abs() < 1e-9);
        }
        for pair in combos.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_best_is_the_true_optimum() {
        let totals = mixed_totals();
        let ranking = rank_numbers(&board_from_totals(totals));
        let config = EngineConfig::default();
        let combos = best_combinations(&ranking, None, &config);
        assert_eq!(combos.len(), 5);

        let pool: Vec<u8> = (13..=32).collect();
        let best = IndexCombinations::<6>::new(pool.len())
            .map(|idx| idx.map(|i| pool[i]))
            .filter(|nums| is_balanced(nums, &config.balance))
            .map(|nums| nums.iter().map(|&n| totals[n as usize - 1]).sum::<f64>())
            .fold(f64::MIN, f64::max);
        assert!((combos[0].score - best).abs() < 1e-9);
    }

    #[test]
    fn test_required_number_outside_pool() {
        let ranking = rank_numbers(&board_from_totals(mixed_totals()));
        let config = EngineConfig::default();
        assert_eq!(ranking.rank_of(40), Some(40));
        let combos = best_combinations(&ranking, Some(40), &config);

        assert_eq!(combos.len(), 5);
        for combo in &combos {
            assert!(combo.contains(40), "{:?}", combo.numbers);
            assert!(is_balanced(&combo.numbers, &config.balance));
        }
    }

    #[test]
    fn test_required_number_without_balanced_grid() {
        // Vivier 1..20 : toutes les grilles sont "basses" (au plus 20 <= 22), donc rien
        // d'équilibré n'existe, même en ajoutant 45.
        let ranking = rank_numbers(&board_from_totals(descending_totals()));
        let combos = best_combinations(&ranking, Some(45), &EngineConfig::default());
        assert!(combos.is_empty());
        assert!(best_combinations(&ranking, None, &EngineConfig::default()).is_empty());
    }
}

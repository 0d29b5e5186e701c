use lotto_db::models::PICK_COUNT;
use serde::Serialize;

use crate::config::BalanceConfig;

/// Grille recommandée, numéros triés par ordre croissant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub rank: usize,
    pub numbers: [u8; PICK_COUNT],
    /// Somme des scores totaux des numéros.
    pub score: f64,
    pub sum: u32,
    pub odd_count: usize,
}

impl Combination {
    /// `numbers` doit déjà être trié. `score_of` donne le score total d'un numéro.
    pub fn new(numbers: [u8; PICK_COUNT], score_of: impl Fn(u8) -> f64) -> Self {
        Self {
            rank: 0,
            numbers,
            score: numbers.iter().map(|&n| score_of(n)).sum(),
            sum: number_sum(&numbers),
            odd_count: odd_count(&numbers),
        }
    }

    /// Ratio pair/impair au format "impairs:pairs".
    pub fn odd_even_ratio(&self) -> String {
        format!("{}:{}", self.odd_count, PICK_COUNT - self.odd_count)
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }
}

/// Trie par score décroissant et numérote 1..=n.
pub(crate) fn sort_and_rank(combinations: &mut Vec<Combination>, keep: usize) {
    combinations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    combinations.truncate(keep);
    for (i, combo) in combinations.iter_mut().enumerate() {
        combo.rank = i + 1;
    }
}

fn odd_count(numbers: &[u8]) -> usize {
    numbers.iter().filter(|&&n| n % 2 == 1).count()
}

fn number_sum(numbers: &[u8]) -> u32 {
    numbers.iter().map(|&n| n as u32).sum()
}

pub fn is_balanced(numbers: &[u8], config: &BalanceConfig) -> bool {
    let low = numbers.iter().filter(|&&n| n <= config.low_threshold).count();
    config.odd_range().contains(&odd_count(numbers))
        && config.low_range().contains(&low)
        && config.sum_range().contains(&number_sum(numbers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced(numbers: [u8; 6]) -> bool {
        is_balanced(&numbers, &BalanceConfig::default())
    }

    #[test]
    fn test_all_odd_rejected() {
        assert!(!balanced([1, 3, 5, 7, 9, 11]));
    }

    #[test]
    fn test_reference_grid_accepted() {
        // 3 impairs, 3 bas (10, 15, 20), somme 135
        assert!(balanced([10, 15, 20, 25, 30, 35]));
    }

    #[test]
    fn test_low_threshold_is_inclusive() {
        // 22 compte comme bas : 5 bas -> rejet
        assert!(!balanced([9, 11, 14, 20, 22, 45]));
        // 23 ne compte pas : 4 bas -> accepté
        assert!(balanced([9, 11, 14, 20, 23, 45]));
        // 1 seul bas -> rejet
        assert!(!balanced([5, 24, 26, 31, 33, 35]));
    }

    #[test]
    fn test_odd_bounds() {
        assert!(balanced([10, 15, 20, 24, 30, 35]));
        assert!(!balanced([10, 15, 20, 24, 30, 36]));
        assert!(balanced([2, 3, 15, 24, 27, 29]));
    }

    #[test]
    fn test_sum_bounds_inclusive() {
        assert!(balanced([2, 3, 15, 24, 27, 29]), "somme 100");
        assert!(!balanced([2, 3, 15, 24, 26, 29]), "somme 99");
        assert!(balanced([10, 15, 22, 40, 41, 42]), "somme 170");
        assert!(!balanced([10, 15, 22, 40, 41, 43]), "somme 171");
    }

    #[test]
    fn test_combination_fields() {
        let combo = Combination::new([10, 15, 20, 25, 30, 35], |n| n as f64 / 10.0);
        assert_eq!(combo.sum, 135);
        assert_eq!(combo.odd_count, 3);
        assert_eq!(combo.odd_even_ratio(), "3:3");
        assert!((combo.score - 13.5).abs() < 1e-10);
        assert!(combo.contains(25));
        assert!(!combo.contains(26));
    }

    #[test]
    fn test_sort_and_rank() {
        let mut combos = vec![
            Combination::new([1, 2, 3, 4, 5, 6], |_| 1.0),
            Combination::new([7, 8, 9, 10, 11, 12], |_| 3.0),
            Combination::new([13, 14, 15, 16, 17, 18], |_| 2.0),
        ];
        sort_and_rank(&mut combos, 2);
        assert_eq!(combos.len(), 2);
        assert_eq!(combos[0].numbers[0], 7);
        assert_eq!(combos[0].rank, 1);
        assert_eq!(combos[1].numbers[0], 13);
        assert_eq!(combos[1].rank, 2);
    }
}

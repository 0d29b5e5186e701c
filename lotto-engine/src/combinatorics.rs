/// Parcours paresseux des sous-ensembles de `K` indices parmi `0..n`, indices strictement
/// croissants, dans l'ordre lexicographique. Produit C(n, K) éléments, sans doublon.
#[derive(Debug, Clone)]
pub struct IndexCombinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> IndexCombinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self {
            n,
            indices,
            done: K == 0 || K > n,
        }
    }
}

impl<const K: usize> Iterator for IndexCombinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices;

        // Avancer l'indice le plus à droite qui peut encore progresser.
        let mut i = K;
        loop {
            if i == 0 {
                self.done = true;
                return Some(current);
            }
            i -= 1;
            if self.indices[i] < self.n - K + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..K {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(current)
    }
}

/// Coefficient binomial C(n, k).
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_enumeration_order() {
        let all: Vec<[usize; 2]> = IndexCombinations::<2>::new(4).collect();
        assert_eq!(all, vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn test_counts_match_binomial() {
        assert_eq!(IndexCombinations::<6>::new(20).count(), 38_760);
        assert_eq!(IndexCombinations::<6>::new(21).count(), 54_264);
        assert_eq!(binomial(21, 6), 54_264);
        assert_eq!(binomial(45, 6), 8_145_060);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(IndexCombinations::<6>::new(5).count(), 0);
        assert_eq!(IndexCombinations::<6>::new(6).collect::<Vec<_>>(), vec![[0, 1, 2, 3, 4, 5]]);
        assert_eq!(IndexCombinations::<0>::new(3).count(), 0);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn test_indices_strictly_increasing() {
        for combo in IndexCombinations::<3>::new(7) {
            assert!(combo.windows(2).all(|w| w[0] < w[1]), "{:?}", combo);
            assert!(combo[2] < 7);
        }
    }
}

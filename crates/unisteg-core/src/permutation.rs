//! Seed-derived slot ordering.
//!
//! Scattering the payload over a pseudo-random slot order spreads the
//! embedded bits uniformly across the image. The order is a pure function of
//! `(seed, range)`, so the revealing side reconstructs the exact ordering
//! used while concealing without it ever being stored.

use fastrand::Rng;

/// A bijective visiting order over the slot range `0..len`.
///
/// Derived from the seed with a Fisher-Yates shuffle driven by a
/// deterministic generator. Identical `(seed, range)` inputs yield the
/// identical order across processes and platforms.
#[derive(Debug, Clone)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Shuffle `0..range` deterministically from `seed`.
    ///
    /// A `range` of zero yields an empty permutation.
    pub fn from_seed(seed: u64, range: usize) -> Self {
        let mut rng = Rng::with_seed(seed);

        let mut indices: Vec<usize> = (0..range).collect();
        for i in (1..range).rev() {
            let j = rng.usize(0..=i);
            indices.swap(i, j);
        }

        Self { indices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Slot indices in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_deterministic() {
        let p1 = Permutation::from_seed(42, 100);
        let p2 = Permutation::from_seed(42, 100);

        assert!(p1.iter().eq(p2.iter()));
    }

    #[test]
    fn test_permutation_different_seeds() {
        let p1 = Permutation::from_seed(1, 100);
        let p2 = Permutation::from_seed(2, 100);

        let differences = p1.iter().zip(p2.iter()).filter(|(a, b)| a != b).count();
        assert!(
            differences > 50,
            "Only {} differences, expected > 50",
            differences
        );
    }

    #[test]
    fn test_permutation_bijective() {
        let p = Permutation::from_seed(7, 100);

        let mut seen = vec![false; 100];
        for i in p.iter() {
            assert!(!seen[i], "Duplicate index {}", i);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&x| x), "Not all indices covered");
    }

    #[test]
    fn test_empty_permutation() {
        let p = Permutation::from_seed(7, 0);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_single_element() {
        let p = Permutation::from_seed(7, 1);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![0]);
    }
}

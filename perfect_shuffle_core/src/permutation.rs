use rand::Rng;
use thiserror::Error;

/// Errors building a permutation from explicit labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    #[error("permutation must contain at least one label")]
    Empty,
    #[error("label {label} is outside 1..={len}")]
    OutOfRange { label: u32, len: usize },
    #[error("label {0} appears more than once")]
    Duplicate(u32),
}

/// A random bijection from final position (0-indexed) to original position
/// label (1-indexed). Fixed for the lifetime of one shuffle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    labels: Vec<u32>,
}

impl Permutation {
    /// Fisher-Yates over `[1..=n]`, walking from the tail to the head.
    ///
    /// Every ordering is equally likely given a uniform `rng`. Exactly
    /// `n - 1` swaps are made. `n == 0` yields an empty permutation.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut labels: Vec<u32> = (1..=n as u32).collect();
        for i in (1..labels.len()).rev() {
            let j = rng.gen_range(0..=i);
            labels.swap(i, j);
        }
        Self { labels }
    }

    /// Generate using the thread-local RNG
    pub fn random(n: usize) -> Self {
        Self::generate(n, &mut rand::thread_rng())
    }

    /// Wrap an explicit ordering, checking it really is a permutation of
    /// `1..=len`.
    pub fn from_labels(labels: Vec<u32>) -> Result<Self, PermutationError> {
        if labels.is_empty() {
            return Err(PermutationError::Empty);
        }
        let len = labels.len();
        let mut seen = vec![false; len];
        for &label in &labels {
            if label == 0 || label as usize > len {
                return Err(PermutationError::OutOfRange { label, len });
            }
            let slot = &mut seen[label as usize - 1];
            if *slot {
                return Err(PermutationError::Duplicate(label));
            }
            *slot = true;
        }
        Ok(Self { labels })
    }

    /// The identity ordering `[1..=n]`
    pub fn identity(n: usize) -> Self {
        Self {
            labels: (1..=n as u32).collect(),
        }
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Label prescribed for the given final position
    pub fn get(&self, index: usize) -> Option<u32> {
        self.labels.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation_of(labels: &[u32], n: usize) -> bool {
        let mut sorted = labels.to_vec();
        sorted.sort_unstable();
        sorted == (1..=n as u32).collect::<Vec<_>>()
    }

    #[test]
    fn test_generate_is_valid_for_every_supported_size() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=99 {
            let perm = Permutation::generate(n, &mut rng);
            assert_eq!(perm.len(), n);
            assert!(is_permutation_of(perm.labels(), n), "n = {n}");
        }
    }

    #[test]
    fn test_single_card_is_identity() {
        let perm = Permutation::random(1);
        assert_eq!(perm.labels(), &[1]);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let perm = Permutation::generate(0, &mut rand::thread_rng());
        assert!(perm.is_empty());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Permutation::generate(52, &mut StdRng::seed_from_u64(42));
        let b = Permutation::generate(52, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rarely_returns_identity() {
        let identity = Permutation::identity(10);
        let unshuffled = (0..50)
            .filter(|_| Permutation::random(10) == identity)
            .count();
        assert!(unshuffled < 5, "{unshuffled} of 50 were unshuffled");
    }

    #[test]
    fn test_every_label_reaches_every_position() {
        // expect ~2000 hits per cell
        let mut rng = StdRng::seed_from_u64(1234);
        let mut hits = [[0u32; 3]; 3];
        for _ in 0..6000 {
            let perm = Permutation::generate(3, &mut rng);
            for (pos, &label) in perm.labels().iter().enumerate() {
                hits[pos][label as usize - 1] += 1;
            }
        }
        for row in hits {
            for count in row {
                assert!((1700..2300).contains(&count), "skewed count {count}");
            }
        }
    }

    #[test]
    fn test_from_labels_accepts_valid_order() {
        let perm = Permutation::from_labels(vec![3, 1, 2]).unwrap();
        assert_eq!(perm.get(0), Some(3));
        assert_eq!(perm.get(3), None);
    }

    #[test]
    fn test_from_labels_rejects_bad_input() {
        assert_eq!(Permutation::from_labels(vec![]), Err(PermutationError::Empty));
        assert_eq!(
            Permutation::from_labels(vec![1, 4, 2]),
            Err(PermutationError::OutOfRange { label: 4, len: 3 })
        );
        assert_eq!(
            Permutation::from_labels(vec![0, 1]),
            Err(PermutationError::OutOfRange { label: 0, len: 2 })
        );
        assert_eq!(
            Permutation::from_labels(vec![2, 2]),
            Err(PermutationError::Duplicate(2))
        );
    }
}

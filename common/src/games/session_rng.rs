use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator owned by one game session, so a seed replays the same
/// computer moves.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        let xs: Vec<_> = (0..20).map(|_| a.random_index(100)).collect();
        let ys: Vec<_> = (0..20).map(|_| b.random_index(100)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_random_index_in_range() {
        let mut rng = SessionRng::new(1);
        for _ in 0..500 {
            assert!(rng.random_index(5) < 5);
        }
    }
}

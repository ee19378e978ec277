use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seeded random source behind every shuffle. One seed reproduces the whole
/// session: the first deal, every reshuffle and every new game.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Child stream seeded from this one, used for each new game.
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.next_u64())
    }

    /// Uniform Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forks_are_reproducible() {
        let mut a = RngState::from_seed(1);
        let mut b = RngState::from_seed(1);
        let fork_a = a.fork();
        let fork_b = b.fork();
        assert_eq!(fork_a.seed(), fork_b.seed());
        assert_ne!(fork_a.seed(), 1);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

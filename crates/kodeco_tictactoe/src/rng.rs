//! Seedable random source for the computer's fallback tier.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, instrument};

/// Random source that remembers the seed it was built from.
///
/// Pass it to [`decide`](crate::decide) or
/// [`Game::play_computer`](crate::Game::play_computer). Two sources built
/// from the same seed make the same choices.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Creates a source from a fixed seed.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded from the thread-local generator.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        debug!(seed, "Generated random seed");
        Self::new(seed)
    }

    /// The seed this source started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

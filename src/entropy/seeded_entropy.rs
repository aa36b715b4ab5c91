use std::sync::atomic::{AtomicU64, Ordering};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::codes::GeneratorError;
use crate::entropy::EntropySource;

/// Deterministic entropy for tests and reproducible fixtures: a fixed seed and a frozen clock.
///
/// Each call hands out the next ChaCha20 stream of the seed. Display draws use the even streams
/// and secure draws the odd ones, so no two calls share bytes and two sources built from the same
/// seed produce the same sequence of values. A clone continues from the point it was taken at.
///
/// The secure generator is only as secret as the seed. Never use this to issue real tokens.
#[derive(Debug)]
pub struct SeededEntropy {
    seed: u64,
    now_ms: u64,
    display_calls: AtomicU64,
    secure_calls: AtomicU64,
}

impl SeededEntropy {
    pub fn new(seed: u64, now_ms: u64) -> Self {
        Self {
            seed,
            now_ms,
            display_calls: AtomicU64::new(0),
            secure_calls: AtomicU64::new(0),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn stream(&self, stream: u64) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);
        rng
    }
}

impl Clone for SeededEntropy {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            now_ms: self.now_ms,
            display_calls: AtomicU64::new(self.display_calls.load(Ordering::Relaxed)),
            secure_calls: AtomicU64::new(self.secure_calls.load(Ordering::Relaxed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    type DisplayRng = ChaCha20Rng;
    type SecureRng = ChaCha20Rng;

    fn display_rng(&self) -> Self::DisplayRng {
        let call = self.display_calls.fetch_add(1, Ordering::Relaxed);
        self.stream(call.wrapping_mul(2))
    }

    fn secure_rng(&self) -> Result<Self::SecureRng, GeneratorError> {
        let call = self.secure_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.stream(call.wrapping_mul(2).wrapping_add(1)))
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

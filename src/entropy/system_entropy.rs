use rand_chacha::ChaCha20Rng;

use crate::codes::{entropy_failure, GeneratorError};
use crate::entropy::EntropySource;

/// Operating system backed entropy and the wall clock.
///
/// Display codes come from the thread local generator. With the `strict` feature enabled they are
/// read straight from the operating system instead, same as secrets minus the userspace stream.
///
/// Display draws are infallible, so if the operating system source can't be read either way of
/// drawing them panics (`ThreadRng` when seeding, `OsRng` on every draw). Only the secret
/// producing calls go through [`EntropySource::secure_rng`] and report
/// [`GeneratorError::EntropyUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    #[cfg(not(feature = "strict"))]
    type DisplayRng = rand::rngs::ThreadRng;

    #[cfg(feature = "strict")]
    type DisplayRng = rand::rngs::OsRng;

    type SecureRng = ChaCha20Rng;

    #[cfg(not(feature = "strict"))]
    fn display_rng(&self) -> Self::DisplayRng {
        rand::thread_rng()
    }

    #[cfg(feature = "strict")]
    fn display_rng(&self) -> Self::DisplayRng {
        rand::rngs::OsRng
    }

    fn secure_rng(&self) -> Result<Self::SecureRng, GeneratorError> {
        crate::utils::crypto_rng().map_err(entropy_failure)
    }

    fn now_ms(&self) -> u64 {
        crate::utils::current_time_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_secure_rngs_are_independent() {
        let mut first = SystemEntropy.secure_rng().unwrap();
        let mut second = SystemEntropy.secure_rng().unwrap();

        let first_bytes: [u8; 32] = first.gen();
        let second_bytes: [u8; 32] = second.gen();
        assert_ne!(first_bytes, second_bytes);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_display_rng_draws_in_range() {
        let mut rng = SystemEntropy.display_rng();

        for _ in 0..1_000 {
            assert!(rng.gen_range(0..36) < 36);
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_clock_is_after_2023() {
        assert!(SystemEntropy.now_ms() > 1_700_000_000_000);
    }
}

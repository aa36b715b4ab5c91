//! # Entropy
//!
//! The randomness and clock seam of [`crate::IdentifierGenerator`]. Production code uses
//! [`SystemEntropy`], tests and fixtures that need repeatable output use [`SeededEntropy`].

mod seeded_entropy;
mod system_entropy;

pub use seeded_entropy::SeededEntropy;
pub use system_entropy::SystemEntropy;

use rand::Rng;
use rand_core::CryptoRngCore;

use crate::codes::GeneratorError;

/// Everything the generator needs from the outside world. Each call hands out a fresh RNG so an
/// implementor doesn't have to share mutable state between concurrent callers.
pub trait EntropySource {
    /// Generator for human facing display codes. Doesn't need to be cryptographically secure.
    /// Draws from it can't report failure, implementors document what happens when their source
    /// breaks.
    type DisplayRng: Rng;

    /// Generator for bearer secrets (tokens and UUIDs).
    type SecureRng: CryptoRngCore;

    fn display_rng(&self) -> Self::DisplayRng;

    /// Implementors must report an unavailable platform source as
    /// [`GeneratorError::EntropyUnavailable`] rather than substituting a weaker generator.
    fn secure_rng(&self) -> Result<Self::SecureRng, GeneratorError>;

    /// Milliseconds since the unix epoch.
    fn now_ms(&self) -> u64;
}

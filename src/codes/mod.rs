//! # Codes
//!
//! Formatting of random draws into the strings handed out to account flows. Everything in here is
//! a plain function of its parameters and an RNG supplied by the caller, there is no state kept
//! between calls.
//!
//! The RNG bound is the entropy policy for each operation. Display codes (numeric, alphanumeric,
//! hex, short IDs and the dash-grouped codes) accept any [`rand::Rng`] as they are shown to a
//! person and checked against a stored copy. Tokens and UUIDs act as bearer secrets and require a
//! [`rand_core::CryptoRngCore`], a general purpose generator won't type check there.

mod alphabet;
mod code_format;
mod generator;
mod random_uuid;
mod short_id;
mod token;

pub use alphabet::Alphabet;
pub use code_format::{CodeFormat, CodeSegment};
pub use generator::{
    alphanumeric_code, hex_code, numeric_code, random_string, DEFAULT_ALPHANUMERIC_LENGTH,
    DEFAULT_HEX_LENGTH, DEFAULT_NUMERIC_LENGTH, MAX_LENGTH,
};
pub use random_uuid::RandomUuid;
pub use short_id::{short_id, DEFAULT_SHORT_ID_LENGTH};
pub use token::{token, DEFAULT_TOKEN_LENGTH};

pub(crate) use generator::check_length;

/// Wraps a failure from a secure entropy source. These are never retried or papered over with a
/// weaker generator, the call that needed the entropy fails.
pub(crate) fn entropy_failure(err: rand::Error) -> GeneratorError {
    tracing::error!("secure entropy source failed: {err}");
    GeneratorError::EntropyUnavailable(err)
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("secure entropy source unavailable: {0}")]
    EntropyUnavailable(rand::Error),

    #[error("code format is invalid: {0}")]
    InvalidFormat(&'static str),

    #[error("length must be between 1 and {max}, was {length}")]
    InvalidLength { length: usize, max: usize },
}

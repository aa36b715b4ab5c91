use rand::Rng;

use crate::codes::{Alphabet, GeneratorError};

pub const DEFAULT_NUMERIC_LENGTH: usize = 6;

pub const DEFAULT_ALPHANUMERIC_LENGTH: usize = 8;

pub const DEFAULT_HEX_LENGTH: usize = 32;

/// Upper bound on any requested length. Applies to character counts for the string codes and to
/// the byte count for tokens.
pub const MAX_LENGTH: usize = 4096;

/// Every length taking operation goes through this check. A zero length would silently produce an
/// empty code which is never what a caller handing it to a user wants.
pub(crate) fn check_length(length: usize) -> Result<(), GeneratorError> {
    if length == 0 || length > MAX_LENGTH {
        tracing::debug!(length, max = MAX_LENGTH, "rejected requested code length");
        return Err(GeneratorError::InvalidLength {
            length,
            max: MAX_LENGTH,
        });
    }

    Ok(())
}

pub(crate) fn push_random_symbols(
    rng: &mut impl Rng,
    alphabet: Alphabet,
    length: usize,
    output: &mut String,
) {
    output.extend((0..length).map(|_| alphabet.sample(rng)));
}

/// Produces `length` symbols from `alphabet`, each drawn independently with replacement.
pub fn random_string(
    rng: &mut impl Rng,
    alphabet: Alphabet,
    length: usize,
) -> Result<String, GeneratorError> {
    check_length(length)?;

    let mut output = String::with_capacity(length);
    push_random_symbols(rng, alphabet, length, &mut output);

    Ok(output)
}

pub fn numeric_code(rng: &mut impl Rng, length: usize) -> Result<String, GeneratorError> {
    random_string(rng, Alphabet::Digits, length)
}

pub fn alphanumeric_code(rng: &mut impl Rng, length: usize) -> Result<String, GeneratorError> {
    random_string(rng, Alphabet::Alphanumeric, length)
}

/// Uppercase hex display code. For secret material use [`crate::codes::token`] which requires a
/// secure RNG and renders lowercase.
pub fn hex_code(rng: &mut impl Rng, length: usize) -> Result<String, GeneratorError> {
    random_string(rng, Alphabet::UpperHex, length)
}

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::codes::{check_length, entropy_failure, Alphabet, GeneratorError};

/// Byte count, the rendered token is twice as many characters.
pub const DEFAULT_TOKEN_LENGTH: usize = 64;

/// Produces `length` bytes from a secure RNG rendered as lowercase hex. Used for bearer secrets
/// such as password reset links and API tokens. The raw bytes are wiped once rendered.
pub fn token(rng: &mut impl CryptoRngCore, length: usize) -> Result<String, GeneratorError> {
    check_length(length)?;

    let mut token_bytes = Zeroizing::new(vec![0u8; length]);
    rng.try_fill_bytes(token_bytes.as_mut_slice())
        .map_err(entropy_failure)?;

    Ok(encode_lower_hex(&token_bytes))
}

fn encode_lower_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        encoded.push(Alphabet::LowerHex.symbol(usize::from(byte >> 4)));
        encoded.push(Alphabet::LowerHex.symbol(usize::from(byte & 0x0f)));
    }

    encoded
}

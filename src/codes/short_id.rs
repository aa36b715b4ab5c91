use rand::Rng;

use crate::codes::{check_length, Alphabet, GeneratorError};

pub const DEFAULT_SHORT_ID_LENGTH: usize = 8;

/// Builds a compact lowercase identifier from a millisecond timestamp followed by a random
/// suffix, both base-36 encoded, truncated or right padded with `'0'` to exactly `length`.
///
/// IDs created later sort roughly after earlier ones but they are not unique. Millisecond
/// timestamps currently take eight base-36 digits so at the default length nothing random
/// survives the truncation and two calls in the same millisecond produce the same ID. Anything
/// that needs uniqueness should use a longer length, a UUID, or a database assigned key.
pub fn short_id(
    rng: &mut impl Rng,
    timestamp_ms: u64,
    length: usize,
) -> Result<String, GeneratorError> {
    check_length(length)?;

    let mut id = encode_base36(timestamp_ms);
    id.push_str(&encode_base36(rng.gen()));
    id.truncate(length);

    let padding = length - id.len();
    id.extend(std::iter::repeat('0').take(padding));

    Ok(id)
}

fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let base = Alphabet::LowerBase36.size() as u64;
    let mut digits = Vec::new();

    while value > 0 {
        digits.push(Alphabet::LowerBase36.symbol((value % base) as usize));
        value /= base;
    }

    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    const REFERENCE_TIMESTAMP_MS: u64 = 1_700_000_000_000;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_base36_encoding() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(REFERENCE_TIMESTAMP_MS), "loyw3v28");
        assert_eq!(encode_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_short_id_starts_with_timestamp() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let id = short_id(&mut rng, REFERENCE_TIMESTAMP_MS, DEFAULT_SHORT_ID_LENGTH).unwrap();
        assert_eq!(id, "loyw3v28");

        let id = short_id(&mut rng, REFERENCE_TIMESTAMP_MS, 12).unwrap();
        assert!(id.starts_with("loyw3v28"));
        assert_eq!(id.len(), 12);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_short_id_exact_length_and_charset() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        for length in [1, 3, 8, 16, 21, 22, 40, 64] {
            let id = short_id(&mut rng, REFERENCE_TIMESTAMP_MS, length).unwrap();
            assert_eq!(id.len(), length);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_short_id_pads_with_zeros() {
        // Eight timestamp digits plus at most thirteen random digits
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let id = short_id(&mut rng, REFERENCE_TIMESTAMP_MS, 40).unwrap();

        assert!(id.ends_with(&"0".repeat(40 - 21)));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_short_id_rejects_zero_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        assert!(matches!(
            short_id(&mut rng, REFERENCE_TIMESTAMP_MS, 0),
            Err(GeneratorError::InvalidLength { length: 0, .. })
        ));
    }
}

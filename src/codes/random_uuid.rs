use rand_core::CryptoRngCore;

use crate::codes::{entropy_failure, GeneratorError};

const UUID_LENGTH: usize = 16;

/// Byte ranges of the `8-4-4-4-12` groups in the canonical textual form.
const UUID_GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// A random (version 4, RFC 4122 variant) UUID. The 122 free bits always come from a secure RNG.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct RandomUuid([u8; UUID_LENGTH]);

impl RandomUuid {
    pub fn as_bytes(&self) -> &[u8; UUID_LENGTH] {
        &self.0
    }

    pub fn generate(rng: &mut impl CryptoRngCore) -> Result<Self, GeneratorError> {
        let mut uuid_bytes = [0u8; UUID_LENGTH];
        rng.try_fill_bytes(&mut uuid_bytes)
            .map_err(entropy_failure)?;

        uuid_bytes[6] = 0b0100_0000 | (uuid_bytes[6] & 0b0000_1111);
        uuid_bytes[8] = 0b1000_0000 | (uuid_bytes[8] & 0b0011_1111);

        Ok(Self(uuid_bytes))
    }

    pub const fn size() -> usize {
        UUID_LENGTH
    }

    /// The version nibble, always 4 for generated values.
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }
}

impl std::fmt::Debug for RandomUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomUuid({self})")
    }
}

impl std::fmt::Display for RandomUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, (start, end)) in UUID_GROUPS.iter().enumerate() {
            if idx > 0 {
                f.write_str("-")?;
            }

            for byte in &self.0[*start..*end] {
                write!(f, "{byte:02x}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::tests::FailingRng;

    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    impl RandomUuid {
        pub(crate) fn from_bytes(bytes: [u8; UUID_LENGTH]) -> Self {
            Self(bytes)
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_display_fmt() {
        let uuid = RandomUuid::from_bytes([
            0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44,
            0x00, 0x00,
        ]);

        assert_eq!(uuid.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(
            format!("{uuid:?}"),
            "RandomUuid(550e8400-e29b-41d4-a716-446655440000)"
        );
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_version_and_variant_bits() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);

        for _ in 0..500 {
            let uuid = RandomUuid::generate(&mut rng).unwrap();
            assert_eq!(uuid.version(), 4);
            assert_eq!(uuid.as_bytes()[8] & 0b1100_0000, 0b1000_0000);
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_entropy_failure_is_reported() {
        let result = RandomUuid::generate(&mut FailingRng);
        assert!(matches!(result, Err(GeneratorError::EntropyUnavailable(_))));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_os_rng_uuid_text_layout() {
        let text = RandomUuid::generate(&mut OsRng).unwrap().to_string();
        let groups: Vec<&str> = text.split('-').collect();

        assert_eq!(text.len(), 36);
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
        assert!(text
            .chars()
            .all(|c| c == '-' || matches!(c, '0'..='9' | 'a'..='f')));
    }
}

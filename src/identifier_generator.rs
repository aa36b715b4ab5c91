use crate::codes::{self, CodeFormat, GeneratorError, RandomUuid};
use crate::entropy::{EntropySource, SystemEntropy};

/// Entry point for issuing codes and tokens to account flows (signup verification, billing
/// confirmations, account recovery and the like).
///
/// The generator holds no state besides its [`EntropySource`], every call pulls a fresh RNG from
/// the source. A single instance can be cloned or shared across threads freely.
///
/// ```
/// use codesmith::prelude::*;
///
/// let generator = IdentifierGenerator::new();
///
/// let code = generator.verification_code();
/// assert!(CodeFormat::VERIFICATION.matches(&code));
///
/// let reset_token = generator.token(DEFAULT_TOKEN_LENGTH)?;
/// assert_eq!(reset_token.len(), DEFAULT_TOKEN_LENGTH * 2);
/// # Ok::<(), GeneratorError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IdentifierGenerator<E = SystemEntropy> {
    entropy: E,
}

impl IdentifierGenerator<SystemEntropy> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: EntropySource> IdentifierGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    pub fn numeric_code(&self, length: usize) -> Result<String, GeneratorError> {
        let code = codes::numeric_code(&mut self.entropy.display_rng(), length)?;
        tracing::trace!(format = "numeric", length, "generated code");
        Ok(code)
    }

    pub fn alphanumeric_code(&self, length: usize) -> Result<String, GeneratorError> {
        let code = codes::alphanumeric_code(&mut self.entropy.display_rng(), length)?;
        tracing::trace!(format = "alphanumeric", length, "generated code");
        Ok(code)
    }

    pub fn hex_code(&self, length: usize) -> Result<String, GeneratorError> {
        let code = codes::hex_code(&mut self.entropy.display_rng(), length)?;
        tracing::trace!(format = "hex", length, "generated code");
        Ok(code)
    }

    pub fn random_uuid(&self) -> Result<RandomUuid, GeneratorError> {
        let mut rng = self.entropy.secure_rng()?;
        let uuid = RandomUuid::generate(&mut rng)?;
        tracing::trace!(format = "uuid", "generated code");
        Ok(uuid)
    }

    /// Canonical hyphenated form of [`Self::random_uuid`].
    pub fn uuid(&self) -> Result<String, GeneratorError> {
        self.random_uuid().map(|uuid| uuid.to_string())
    }

    /// `length` is a byte count, see [`codes::token`].
    pub fn token(&self, length: usize) -> Result<String, GeneratorError> {
        codes::check_length(length)?;

        let mut rng = self.entropy.secure_rng()?;
        let token = codes::token(&mut rng, length)?;
        tracing::trace!(format = "token", length, "generated code");

        Ok(token)
    }

    /// Roughly time ordered but not unique, see [`codes::short_id`] for the collision caveats.
    pub fn short_id(&self, length: usize) -> Result<String, GeneratorError> {
        let id = codes::short_id(
            &mut self.entropy.display_rng(),
            self.entropy.now_ms(),
            length,
        )?;
        tracing::trace!(format = "short_id", length, "generated code");
        Ok(id)
    }

    pub fn grouped_code(&self, format: &CodeFormat) -> String {
        let code = format.generate(&mut self.entropy.display_rng());
        tracing::trace!(
            format = "grouped",
            length = format.code_length(),
            "generated code"
        );
        code
    }

    /// `LLL-NNN`
    pub fn verification_code(&self) -> String {
        self.grouped_code(&CodeFormat::VERIFICATION)
    }

    /// `LLL-LLL-LLL`
    pub fn confirmation_code(&self) -> String {
        self.grouped_code(&CodeFormat::CONFIRMATION)
    }

    /// `NNNN-NNNN-NNNN-NNNN`
    pub fn recovery_code(&self) -> String {
        self.grouped_code(&CodeFormat::RECOVERY)
    }
}

use rand::Rng;

use crate::codes::generator::push_random_symbols;
use crate::codes::{check_length, Alphabet, GeneratorError};

const VERIFICATION_SEGMENTS: &[CodeSegment] = &[
    CodeSegment::new(Alphabet::Alphanumeric, 3),
    CodeSegment::new(Alphabet::Digits, 3),
];

const CONFIRMATION_SEGMENTS: &[CodeSegment] = &[
    CodeSegment::new(Alphabet::Alphanumeric, 3),
    CodeSegment::new(Alphabet::Alphanumeric, 3),
    CodeSegment::new(Alphabet::Alphanumeric, 3),
];

const RECOVERY_SEGMENTS: &[CodeSegment] = &[
    CodeSegment::new(Alphabet::Digits, 4),
    CodeSegment::new(Alphabet::Digits, 4),
    CodeSegment::new(Alphabet::Digits, 4),
    CodeSegment::new(Alphabet::Digits, 4),
];

/// One group of a segmented code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CodeSegment {
    alphabet: Alphabet,
    length: usize,
}

impl CodeSegment {
    pub const fn new(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn matches(&self, part: &str) -> bool {
        part.len() == self.length && part.chars().all(|c| self.alphabet.contains(c))
    }
}

/// The shape of a human readable code made of fixed length groups joined by a separator, such as
/// `K7Q-204`. Formats are static descriptions and can both produce new codes and check whether a
/// string typed back in by a user could have been one of them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodeFormat {
    segments: &'static [CodeSegment],
    separator: char,
}

impl CodeFormat {
    /// `LLL-NNN`, short codes sent out for email or phone verification.
    pub const VERIFICATION: Self = Self {
        segments: VERIFICATION_SEGMENTS,
        separator: '-',
    };

    /// `LLL-LLL-LLL`, confirmation references for completed actions such as a billing change.
    pub const CONFIRMATION: Self = Self {
        segments: CONFIRMATION_SEGMENTS,
        separator: '-',
    };

    /// `NNNN-NNNN-NNNN-NNNN`, single use account recovery codes.
    pub const RECOVERY: Self = Self {
        segments: RECOVERY_SEGMENTS,
        separator: '-',
    };

    /// Builds a custom format. The separator can't be a symbol of any segment's alphabet,
    /// otherwise a code couldn't be split back into its groups when checking it.
    pub fn new(
        segments: &'static [CodeSegment],
        separator: char,
    ) -> Result<Self, GeneratorError> {
        if segments.is_empty() {
            return Err(GeneratorError::InvalidFormat("at least one segment is required"));
        }

        for segment in segments {
            check_length(segment.length)?;

            if segment.alphabet.contains(separator) {
                return Err(GeneratorError::InvalidFormat(
                    "separator collides with a segment alphabet",
                ));
            }
        }

        let format = Self {
            segments,
            separator,
        };
        check_length(format.code_length())?;

        Ok(format)
    }

    /// Total length of a generated code including the separators.
    pub fn code_length(&self) -> usize {
        let symbols: usize = self.segments.iter().map(|s| s.length).sum();
        symbols + self.segments.len().saturating_sub(1) * self.separator.len_utf8()
    }

    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let mut code = String::with_capacity(self.code_length());

        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                code.push(self.separator);
            }

            push_random_symbols(rng, segment.alphabet, segment.length, &mut code);
        }

        code
    }

    /// Checks the shape of `candidate` only, a match says nothing about whether the code was ever
    /// issued.
    pub fn matches(&self, candidate: &str) -> bool {
        let mut parts = candidate.split(self.separator);

        for segment in self.segments {
            match parts.next() {
                Some(part) if segment.matches(part) => {}
                _ => return false,
            }
        }

        parts.next().is_none()
    }

    pub fn segments(&self) -> &'static [CodeSegment] {
        self.segments
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

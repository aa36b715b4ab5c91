use std::fmt::{self, Display, Formatter};

use crate::codes::GeneratorError;

/// Catch-all error for applications that don't care which part of the library failed, mostly
/// useful at the top of a binary.
#[derive(Debug)]
pub struct CodesmithError(String);

impl From<&'static str> for CodesmithError {
    fn from(val: &'static str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for CodesmithError {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl From<GeneratorError> for CodesmithError {
    fn from(error: GeneratorError) -> Self {
        Self(error.to_string())
    }
}

impl Display for CodesmithError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CodesmithError {}

pub type CodesmithResult<T> = Result<T, CodesmithError>;

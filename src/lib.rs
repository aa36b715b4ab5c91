// Note: wasm-pack test does not run any unit tests that are pub reachable from the root module, I
// think this includes the test module itself

pub mod codes;
pub mod entropy;
pub mod error;
pub mod utils;
pub mod version;

mod identifier_generator;

pub use identifier_generator::IdentifierGenerator;

pub mod prelude {
    pub use crate::codes::{
        CodeFormat, CodeSegment, GeneratorError, RandomUuid, DEFAULT_ALPHANUMERIC_LENGTH,
        DEFAULT_HEX_LENGTH, DEFAULT_NUMERIC_LENGTH, DEFAULT_SHORT_ID_LENGTH, DEFAULT_TOKEN_LENGTH,
    };
    pub use crate::entropy::{EntropySource, SeededEntropy, SystemEntropy};
    pub use crate::error::*;
    pub use crate::version::*;
    pub use crate::IdentifierGenerator;
}

use thiserror::Error;

use crate::alphabet::MAX_ALPHABET_SIZE;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating generation parameters.
///
/// Both are reported before any randomness is consumed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "alphabet must contain between 1 and {max} symbols, got {size}",
        max = MAX_ALPHABET_SIZE
    )]
    InvalidAlphabet { size: usize },
    #[error("id length must be greater than zero, got {length}")]
    InvalidLength { length: usize },
}

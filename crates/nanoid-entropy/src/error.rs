use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntropyError>;

/// Errors returned when constructing a random source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntropyError {
    #[error("xorshift state must not be all zeros")]
    ZeroState,
}

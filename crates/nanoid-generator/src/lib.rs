//! Short, URL-safe random identifiers.
//!
//! Ids are built by rejection sampling over bytes from a pluggable
//! [`RandomSource`](nanoid_entropy::RandomSource), so every symbol of the
//! alphabet is equally likely regardless of the alphabet size.

pub mod alphabet;
pub mod error;
mod generate;
mod generator;
mod nano_id;

pub use alphabet::Alphabet;
pub use error::{Error, Result};
pub use generate::{
    generate, generate_with_alphabet, generate_with_length, generate_with_source, nanoid,
};
pub use generator::{GeneratorSettings, NanoIdGenerator};
pub use nano_id::NanoId;

/// Trait for generating identifiers.
///
/// Implementations are pure generators that don't track previously issued
/// ids; uniqueness is only as strong as the generator's randomness.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<String>;

    fn generate(&self) -> Self::Output;
}

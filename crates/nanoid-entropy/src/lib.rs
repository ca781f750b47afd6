//! Sources of random bytes for identifier generation.
//!
//! Everything that can fill a byte buffer with uniformly distributed bytes
//! implements [`RandomSource`]: the operating system entropy source, the
//! deterministic [`XorShift`] generator, any [`rand`] generator wrapped in
//! [`FromRng`], and plain `FnMut(&mut [u8])` closures.

pub mod error;
mod source;
mod xorshift;

pub use error::{EntropyError, Result};
pub use source::{FromRng, OsRandom, RandomSource};
pub use xorshift::XorShift;

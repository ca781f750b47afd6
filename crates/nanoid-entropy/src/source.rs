use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

pub trait RandomSource {
    /// Fills every byte of `buf` with an independent, uniformly distributed value.
    ///
    /// Implementations may keep internal state between calls but must not fail
    /// for a valid buffer.
    fn fill(&mut self, buf: &mut [u8]);
}

impl<F> RandomSource for F
where
    F: FnMut(&mut [u8]),
{
    fn fill(&mut self, buf: &mut [u8]) {
        self(buf)
    }
}

/// Random bytes from the operating system entropy source.
///
/// Construct one where it is needed and pass it down; there is no shared
/// global instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        // An unavailable OS entropy source cannot be recovered from here,
        // `UnwrapErr` turns it into a panic.
        OsRng.unwrap_err().fill_bytes(buf);
    }
}

/// Adapts any [`rand`] generator into a [`RandomSource`].
///
/// Useful for plugging in a seeded `StdRng` in tests.
#[derive(Debug, Clone)]
pub struct FromRng<R>(pub R);

impl<R: RngCore> FromRng<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> RandomSource for FromRng<R> {
    fn fill(&mut self, buf: &mut [u8]) {
        self.0.fill_bytes(buf);
    }
}

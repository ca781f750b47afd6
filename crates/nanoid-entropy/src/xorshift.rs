use crate::error::{EntropyError, Result};
use crate::RandomSource;

const DEFAULT_STATE: [u32; 4] = [0x193A_6754, 0xA8A7_D469, 0x9783_0E05, 0x113B_A7BB];

/// Marsaglia's xorshift128 generator.
///
/// Fast and fully deterministic, which makes generated identifiers
/// reproducible in tests. It is **not** cryptographically secure.
///
/// The state is advanced in place, so an instance must not be shared between
/// callers without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorShift {
    /// Creates a generator seeded with the fixed default constants.
    pub fn new() -> Self {
        let [x, y, z, w] = DEFAULT_STATE;
        Self { x, y, z, w }
    }

    /// Creates a generator from a custom state.
    ///
    /// The all-zero state is a fixed point of xorshift and is rejected.
    pub fn with_state(state: [u32; 4]) -> Result<Self> {
        if state == [0; 4] {
            return Err(EntropyError::ZeroState);
        }
        let [x, y, z, w] = state;
        Ok(Self { x, y, z, w })
    }

    /// Advances the generator and returns the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        self.w
    }
}

impl Default for XorShift {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for XorShift {
    /// Each byte is the low byte of one 32-bit output.
    fn fill(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.next_u32() as u8;
        }
    }
}

//! Xorshift32 pseudo-random generator.
//!
//! Deterministic and entropy-free: the same seed always yields the same fruit
//! and pipe placements, on every platform.

use super::constants::DEFAULT_SEED;
use crate::error::ArcadeError;
use rand::{RngCore, SeedableRng};

/// Three-shift xorshift over a single 32-bit state word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Generator seeded with the fixed power-on constant.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }

    /// Zero is the fixed point of the transform and is rejected.
    pub fn with_seed(seed: u32) -> Result<Self, ArcadeError> {
        if seed == 0 {
            return Err(ArcadeError::ZeroSeed);
        }
        Ok(Self { state: seed })
    }

    /// Advance the state and return it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next());
        let hi = u64::from(self.next());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    /// An all-zero seed falls back to the power-on constant.
    fn from_seed(seed: Self::Seed) -> Self {
        match u32::from_le_bytes(seed) {
            0 => Self::new(),
            state => Self { state },
        }
    }
}

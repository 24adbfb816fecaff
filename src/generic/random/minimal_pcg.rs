//! A minimal implementation of the PCG-XSH-RR 32-bit pseudorandom number generator.
//!
//! Small, fast, and seedable, which is all a reproducible [scramble](crate::encoding::Encoding::scramble) requires.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment
pub struct MinimalPCG32 {
    state: u64,
    increment: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(self.increment);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rotation = (old_state >> 59) as u32;

        xorshifted.rotate_right(rotation)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state_bytes = [0; 8];
        state_bytes.copy_from_slice(&seed[0..8]);

        let mut increment_bytes = [0; 8];
        increment_bytes.copy_from_slice(&seed[8..16]);

        Self {
            state: u64::from_le_bytes(state_bytes),
            // The increment must be odd.
            increment: u64::from_le_bytes(increment_bytes) | 1,
        }
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::seed_from_u64(0xcafef00dd15ea5e5)
    }
}

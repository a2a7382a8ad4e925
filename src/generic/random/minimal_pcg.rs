//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.[^note]
//!
//! PCG(32) is used as the default source of (pseudo)random numbers as it is simple, fast, and is reproducible from a single seed.
//! A [context](crate::context) is paramaterised to any source of rng, though [Context](crate::context::Context) fixes the rng as [MinimalPCG32], seeded from the [config](crate::config::Config::seed).
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    const MULTIPLIER: u64 = 6364136223846793005;

    /// The stream selected by every seed.
    const STREAM: u64 = 0xda3e39cb94b95bdb;

    fn step(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.inc);
        old_state
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Two outputs, low bits first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self {
            state: 0,
            inc: (Self::STREAM << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.step();
        rng
    }
}

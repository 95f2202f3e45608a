//! Linear congruential generator used to seed the noise lattices.

use crate::error::{NoiseError, Result};

/// Simple pseudo-random number generator using LCG (Linear Congruential Generator)
///
/// Modulus 2^32 comes for free from `u32` wrapping arithmetic, so the period is
/// the full 2^32 before the sequence repeats.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Modulus of the generator.
    pub const M: u64 = 1 << 32;
    // LCG parameters from Numerical Recipes
    const A: u32 = 1664525;
    const C: u32 = 1013904223;

    /// Create a generator from `seed`, which must be below [`Lcg::M`].
    ///
    /// Unlike most LCGs in the wild a zero seed is kept as is: the sequence for
    /// seed 0 starts at `C / M`.
    pub fn new(seed: u64) -> Result<Self> {
        let state = u32::try_from(seed).map_err(|_| NoiseError::InvalidSeed {
            seed,
            modulus: Self::M,
        })?;
        Ok(Self { state })
    }

    /// Advance the state once and return the raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::A).wrapping_add(Self::C);
        self.state
    }

    /// Generate a float in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / Self::M as f64
    }

    /// Generate a float in range [min, max)
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

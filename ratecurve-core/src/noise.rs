//! 1-D lattice noise
//!
//! Both generators draw their lattice once from an [`Lcg`] at construction and
//! are read-only afterwards, so a built generator can be shared freely across
//! threads.

use crate::ease::{self, Ease};
use crate::error::Result;
use crate::math;
use crate::rng::Lcg;

/// Value noise over a 10-entry lattice of uniform samples in [0, 1).
///
/// Linear interpolation between neighbours, so the curve is continuous but has
/// visible kinks at every integer.
#[derive(Debug, Clone)]
pub struct ValueNoise1D {
    vertices: [f64; Self::PERIOD],
}

impl ValueNoise1D {
    pub const PERIOD: usize = 10;

    pub fn new(seed: u64) -> Result<Self> {
        Ok(Self::from_rng(&mut Lcg::new(seed)?))
    }

    /// Build a lattice from the next [`Self::PERIOD`] draws of `rng`.
    pub fn from_rng(rng: &mut Lcg) -> Self {
        let mut vertices = [0.0; Self::PERIOD];
        for vertex in vertices.iter_mut() {
            *vertex = rng.next_f64();
        }
        Self { vertices }
    }

    pub fn lattice(&self) -> &[f64] {
        &self.vertices
    }

    /// Sample the noise at `x`. Negative positions wrap like positive ones.
    pub fn at(&self, x: f64) -> f64 {
        let floor = math::floor(x);
        let x_min = (floor as i64).rem_euclid(Self::PERIOD as i64) as usize;
        let x_max = (x_min + 1) % Self::PERIOD;
        let t = x - floor;
        ease::blend(self.vertices[x_min], self.vertices[x_max], t)
    }
}

/// Gradient (Perlin-style) noise over a 256-entry lattice of slopes in [-1, 1).
///
/// Each lattice point contributes a line through zero with its own slope, and
/// the two neighbouring lines are blended with the configured [`Ease`]. The
/// result is exactly zero at every integer position. In practice the output
/// stays within about ±0.3, but nothing clamps it.
#[derive(Debug, Clone)]
pub struct GradientNoise1D {
    slopes: [f64; Self::PERIOD],
    ease: Ease,
}

impl GradientNoise1D {
    /// Must stay a power of two for the index mask.
    pub const PERIOD: usize = 256;
    const MASK: i64 = Self::PERIOD as i64 - 1;

    pub fn new(seed: u64, ease: Ease) -> Result<Self> {
        Ok(Self::from_rng(&mut Lcg::new(seed)?, ease))
    }

    /// Build a lattice from the next [`Self::PERIOD`] draws of `rng`.
    pub fn from_rng(rng: &mut Lcg, ease: Ease) -> Self {
        let mut slopes = [0.0; Self::PERIOD];
        for slope in slopes.iter_mut() {
            *slope = rng.next_f64() * 2.0 - 1.0;
        }
        Self { slopes, ease }
    }

    pub fn lattice(&self) -> &[f64] {
        &self.slopes
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn at(&self, x: f64) -> f64 {
        let floor = math::floor(x);
        let i = floor as i64;
        let x_min = (i & Self::MASK) as usize;
        let x_max = (x_min + 1) & Self::MASK as usize;
        let dist = x - floor;

        let pos_min = dist * self.slopes[x_min];
        let pos_max = -(1.0 - dist) * self.slopes[x_max];
        self.ease.blend(pos_min, pos_max, dist)
    }
}

//! Interpolation kernels
//!
//! `lerp` plus the ease curves that remap the blend parameter before it is
//! handed to `lerp`, and a checked linear range remap.

use crate::error::{NoiseError, Result};
use crate::math;

/// Slack allowed around [0, 1] before a blend parameter is rejected.
pub const UNIT_TOLERANCE: f64 = 1e-9;

/// Validate a blend parameter, snapping boundary noise back into [0, 1].
fn unit(t: f64) -> Result<f64> {
    if t >= -UNIT_TOLERANCE && t <= 1.0 + UNIT_TOLERANCE {
        Ok(t.clamp(0.0, 1.0))
    } else {
        // NaN lands here as well
        Err(NoiseError::InvalidArgument { t })
    }
}

#[inline(always)]
pub(crate) fn blend(y0: f64, y1: f64, t: f64) -> f64 {
    y0 + t * (y1 - y0)
}

/// Linear interpolation
///
/// lerp(y0, y1, t) = y0 + t * (y1 - y0), with t ∈ [0, 1].
///
/// # Example
///
/// ```rust
/// use ratecurve_core::ease::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5).unwrap(), 5.0);
/// assert!(lerp(0.0, 10.0, 1.5).is_err());
/// ```
pub fn lerp(y0: f64, y1: f64, t: f64) -> Result<f64> {
    Ok(blend(y0, y1, unit(t)?))
}

/// Cosine interpolation: a symmetric S-curve.
pub fn cosine(y0: f64, y1: f64, t: f64) -> Result<f64> {
    Ease::Cosine.apply(y0, y1, t)
}

/// Smoothstep interpolation, flat at both ends.
pub fn smoothstep(y0: f64, y1: f64, t: f64) -> Result<f64> {
    Ease::Smoothstep.apply(y0, y1, t)
}

/// Ease-out interpolation: steep start, flattening towards t = 1.
pub fn decel(y0: f64, y1: f64, t: f64) -> Result<f64> {
    Ease::Decel.apply(y0, y1, t)
}

/// Linearly remap `val` from `[low1, high1]` to `[low2, high2]`.
///
/// A zero-width source range is rejected rather than divided by.
///
/// ```rust
/// use ratecurve_core::ease::map;
///
/// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
/// assert!(map(15.0, 0.0, 10.0, 0.0, 100.0).is_err());
/// ```
pub fn map(val: f64, low1: f64, high1: f64, low2: f64, high2: f64) -> Result<f64> {
    let well_formed = low1 < high1 && low2 <= high2 && (low1..=high1).contains(&val);
    if !well_formed {
        return Err(NoiseError::InvalidRangeMapping {
            val,
            low1,
            high1,
            low2,
            high2,
        });
    }
    Ok(low2 + (val - low1) * (high2 - low2) / (high1 - low1))
}

/// Named ease curve selectable at noise construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Cosine,
    #[default]
    Smoothstep,
    Decel,
}

impl Ease {
    pub const ALL: [Ease; 3] = [Ease::Cosine, Ease::Smoothstep, Ease::Decel];

    pub fn name(&self) -> &'static str {
        match self {
            Ease::Cosine => "cosine",
            Ease::Smoothstep => "smoothstep",
            Ease::Decel => "decel",
        }
    }

    /// Remap a blend parameter. Maps 0 to 0 and 1 to 1 for every curve.
    #[inline]
    pub fn remap(&self, t: f64) -> f64 {
        match self {
            Ease::Cosine => -0.5 * math::cos(t * core::f64::consts::PI) + 0.5,
            Ease::Smoothstep => t * t * (3.0 - 2.0 * t),
            Ease::Decel => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
        }
    }

    /// `lerp(y0, y1, remap(t))`, validating `t` first.
    pub fn apply(&self, y0: f64, y1: f64, t: f64) -> Result<f64> {
        let t = unit(t)?;
        Ok(blend(y0, y1, self.remap(t)))
    }

    /// Unchecked variant for internal callers that already hold t ∈ [0, 1].
    #[inline]
    pub(crate) fn blend(&self, y0: f64, y1: f64, t: f64) -> f64 {
        blend(y0, y1, self.remap(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_values() {
        assert_eq!(lerp(0.0, 10.0, 0.0).unwrap(), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0).unwrap(), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5).unwrap(), 5.0);
    }

    #[test]
    fn test_lerp_rejects_out_of_range() {
        assert_eq!(
            lerp(0.0, 1.0, -0.5),
            Err(NoiseError::InvalidArgument { t: -0.5 })
        );
        assert!(lerp(0.0, 1.0, 1.01).is_err());
        assert!(lerp(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_lerp_tolerates_boundary_noise() {
        assert_eq!(lerp(0.0, 10.0, 1.0 + 1e-12).unwrap(), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1e-12).unwrap(), 0.0);
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in Ease::ALL {
            assert!(ease.apply(0.0, 1.0, 0.0).unwrap().abs() < 1e-12, "{}", ease.name());
            assert!((ease.apply(0.0, 1.0, 1.0).unwrap() - 1.0).abs() < 1e-12, "{}", ease.name());
        }
    }

    #[test]
    fn test_decel_front_loaded() {
        assert_eq!(decel(0.0, 1.0, 0.0).unwrap(), 0.0);
        assert_eq!(decel(0.0, 1.0, 1.0).unwrap(), 1.0);
        assert!(decel(0.0, 1.0, 0.1).unwrap() > lerp(0.0, 1.0, 0.1).unwrap());
    }

    #[test]
    fn test_cosine_and_smoothstep_symmetric_midpoint() {
        assert!((cosine(0.0, 1.0, 0.5).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(smoothstep(0.0, 1.0, 0.5).unwrap(), 0.5);
        // S-curves lag behind linear in the first half
        assert!(smoothstep(0.0, 1.0, 0.2).unwrap() < 0.2);
        assert!(cosine(0.0, 1.0, 0.2).unwrap() < 0.2);
    }

    #[test]
    fn test_ease_monotonic() {
        for ease in Ease::ALL {
            let mut prev = ease.remap(0.0);
            for i in 1..=100 {
                let next = ease.remap(i as f64 / 100.0);
                assert!(next >= prev, "{} not monotonic at {}", ease.name(), i);
                prev = next;
            }
        }
    }

    #[test]
    fn test_ease_rejects_bad_parameter() {
        for ease in Ease::ALL {
            assert!(ease.apply(0.0, 1.0, 2.0).is_err());
        }
    }

    #[test]
    fn test_map_values() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
        assert_eq!(map(0.0, 0.0, 10.0, 20.0, 30.0).unwrap(), 20.0);
        assert_eq!(map(10.0, 0.0, 10.0, 20.0, 30.0).unwrap(), 30.0);
        assert_eq!(map(3.0, 0.0, 10.0, 5.0, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_map_rejects_malformed() {
        assert!(matches!(
            map(15.0, 0.0, 10.0, 0.0, 100.0),
            Err(NoiseError::InvalidRangeMapping { .. })
        ));
        assert!(map(5.0, 10.0, 0.0, 0.0, 100.0).is_err());
        assert!(map(5.0, 0.0, 10.0, 100.0, 0.0).is_err());
        assert!(map(5.0, 5.0, 5.0, 0.0, 100.0).is_err());
        assert!(map(f64::NAN, 0.0, 10.0, 0.0, 100.0).is_err());
    }
}

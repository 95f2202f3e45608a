//! Speed profile: an eased ramp-up followed by noisy cruising speed.

use crate::curve::Curve;
use crate::ease::Ease;
use crate::error::{NoiseError, Result};
use crate::noise::GradientNoise1D;

/// Length of the ramp-up phase in milliseconds.
pub const RAMP_MS: f64 = 5000.0;
/// Noise units spanned by one full transfer.
pub const NOISE_SPAN: f64 = 5.0;
/// Scale applied to the noise in the steady phase, about ±5% around target.
pub const NOISE_AMPLITUDE: f64 = 0.16;

/// Tuning for a [`SpeedProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    pub ramp_ms: f64,
    pub noise_span: f64,
    pub noise_amplitude: f64,
    pub ease: Ease,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            ramp_ms: RAMP_MS,
            noise_span: NOISE_SPAN,
            noise_amplitude: NOISE_AMPLITUDE,
            ease: Ease::Smoothstep,
        }
    }
}

impl ProfileConfig {
    fn validate(&self) -> Result<()> {
        positive("ramp_ms", self.ramp_ms)?;
        positive("noise_span", self.noise_span)?;
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(NoiseError::InvalidProfile {
                field: "noise_amplitude",
                value: self.noise_amplitude,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(NoiseError::InvalidProfile { field, value })
    }
}

/// Which half of the curve a query falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ramp,
    Steady,
}

/// Time-indexed throughput curve for one simulated download.
///
/// `speed` is in units per second, `size` in units, and every time argument is
/// elapsed milliseconds since the download started. The profile never changes
/// after construction: all queries take `&self` and depend only on their
/// argument.
///
/// The ramp ends at exactly 1.0 while the steady phase starts at
/// `1 + amplitude * noise`, so there is a small step at the seam.
#[derive(Debug, Clone)]
pub struct SpeedProfile {
    speed: f64,
    size: f64,
    total_time: f64,
    config: ProfileConfig,
    noise: GradientNoise1D,
}

impl SpeedProfile {
    pub fn new(speed: f64, size: f64, seed: u64) -> Result<Self> {
        Self::with_config(speed, size, seed, ProfileConfig::default())
    }

    pub fn with_config(speed: f64, size: f64, seed: u64, config: ProfileConfig) -> Result<Self> {
        let speed = positive("speed", speed)?;
        let size = positive("size", size)?;
        config.validate()?;
        let noise = GradientNoise1D::new(seed, config.ease)?;

        Ok(Self {
            speed,
            size,
            total_time: size / speed * 1000.0,
            config,
            noise,
        })
    }

    /// Build a profile with a seed drawn from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy(speed: f64, size: f64) -> Result<Self> {
        use rand::Rng;
        let seed: u32 = rand::thread_rng().gen();
        Self::new(speed, size, seed as u64)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn file_size(&self) -> f64 {
        self.size
    }

    /// Duration of the whole transfer at target speed, in milliseconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn phase(&self, elapsed_ms: f64) -> Phase {
        if clamp_elapsed(elapsed_ms) <= self.config.ramp_ms {
            Phase::Ramp
        } else {
            Phase::Steady
        }
    }

    /// Speed as a fraction of the target speed. Negative times read as 0.
    pub fn normal_value(&self, elapsed_ms: f64) -> f64 {
        let elapsed = clamp_elapsed(elapsed_ms);
        match self.phase(elapsed) {
            Phase::Ramp => Ease::Decel.blend(0.0, 1.0, elapsed / self.config.ramp_ms),
            Phase::Steady => {
                let t = elapsed / self.total_time * self.config.noise_span;
                1.0 + self.config.noise_amplitude * self.noise.at(t)
            }
        }
    }

    /// Instantaneous speed in units per second.
    pub fn value(&self, elapsed_ms: f64) -> f64 {
        self.normal_value(elapsed_ms) * self.speed
    }

    /// `count` evenly spaced speeds covering `[0, total_time)`.
    pub fn sample_iter(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let step = if count == 0 {
            0.0
        } else {
            self.total_time / count as f64
        };
        (0..count).map(move |i| self.value(i as f64 * step))
    }

    /// Fixed-capacity variant of [`Self::sample_iter`] with `N` points.
    pub fn sample<const N: usize>(&self) -> Curve<N> {
        Curve::from_profile(self)
    }
}

#[inline]
fn clamp_elapsed(elapsed_ms: f64) -> f64 {
    // f64::max discards NaN
    elapsed_ms.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SpeedProfile {
        SpeedProfile::new(400.0, 10000.0, 12345).unwrap()
    }

    #[test]
    fn test_total_time() {
        let p = profile();
        assert_eq!(p.total_time(), 25000.0);
        assert_eq!(p.speed(), 400.0);
        assert_eq!(p.file_size(), 10000.0);
    }

    #[test]
    fn test_ramp_endpoints() {
        let p = profile();
        assert_eq!(p.normal_value(0.0), 0.0);
        assert_eq!(p.normal_value(RAMP_MS), 1.0);
        assert_eq!(p.value(RAMP_MS), 400.0);
    }

    #[test]
    fn test_ramp_monotonic() {
        let p = profile();
        let mut prev = p.normal_value(0.0);
        for ms in (50..=5000).step_by(50) {
            let next = p.normal_value(ms as f64);
            assert!(next >= prev, "ramp dipped at {} ms", ms);
            prev = next;
        }
    }

    #[test]
    fn test_ramp_is_decel() {
        let p = profile();
        // 1 - (1 - 0.5)^2
        assert_eq!(p.normal_value(2500.0), 0.75);
    }

    #[test]
    fn test_phases() {
        let p = profile();
        assert_eq!(p.phase(0.0), Phase::Ramp);
        assert_eq!(p.phase(RAMP_MS), Phase::Ramp);
        assert_eq!(p.phase(RAMP_MS + 0.001), Phase::Steady);
    }

    #[test]
    fn test_steady_phase_band() {
        let p = profile();
        for ms in (5001..100_000).step_by(37) {
            let v = p.normal_value(ms as f64);
            assert!((0.85..=1.15).contains(&v), "{} at {} ms", v, ms);
        }
    }

    #[test]
    fn test_steady_phase_matches_noise() {
        let p = profile();
        let noise = GradientNoise1D::new(12345, Ease::Smoothstep).unwrap();
        let elapsed = 12_345.0;
        let expected = 1.0 + 0.16 * noise.at(elapsed / 25000.0 * 5.0);
        assert_eq!(p.normal_value(elapsed), expected);
    }

    #[test]
    fn test_value_scales_normal_value() {
        let p = profile();
        for ms in (0..60_000).step_by(250) {
            let t = ms as f64;
            assert_eq!(p.value(t), p.normal_value(t) * 400.0);
        }
    }

    #[test]
    fn test_queries_idempotent_and_order_free() {
        let p = profile();
        let forward: Vec<f64> = (0..200).map(|i| p.value(i as f64 * 123.0)).collect();
        let backward: Vec<f64> = (0..200).rev().map(|i| p.value(i as f64 * 123.0)).collect();
        let reversed: Vec<f64> = backward.into_iter().rev().collect();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_same_seed_same_curve() {
        let a = SpeedProfile::new(250.0, 5000.0, 777).unwrap();
        let b = SpeedProfile::new(250.0, 5000.0, 777).unwrap();
        for i in 0..500 {
            let t = i as f64 * 97.0;
            assert_eq!(a.value(t), b.value(t));
        }
    }

    #[test]
    fn test_negative_elapsed_reads_as_start() {
        let p = profile();
        assert_eq!(p.normal_value(-100.0), 0.0);
        assert_eq!(p.normal_value(f64::NAN), 0.0);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(matches!(
            SpeedProfile::new(0.0, 100.0, 1),
            Err(NoiseError::InvalidProfile { field: "speed", .. })
        ));
        assert!(matches!(
            SpeedProfile::new(10.0, -1.0, 1),
            Err(NoiseError::InvalidProfile { field: "size", .. })
        ));
        assert!(SpeedProfile::new(f64::INFINITY, 100.0, 1).is_err());
        assert!(matches!(
            SpeedProfile::new(10.0, 100.0, 1 << 32),
            Err(NoiseError::InvalidSeed { .. })
        ));
        let config = ProfileConfig {
            ramp_ms: 0.0,
            ..ProfileConfig::default()
        };
        assert!(SpeedProfile::with_config(10.0, 100.0, 1, config).is_err());
    }

    #[test]
    fn test_custom_config() {
        let config = ProfileConfig {
            ramp_ms: 1000.0,
            noise_amplitude: 0.0,
            ..ProfileConfig::default()
        };
        let p = SpeedProfile::with_config(100.0, 1000.0, 9, config).unwrap();
        assert_eq!(p.normal_value(1000.0), 1.0);
        assert_eq!(p.normal_value(1500.0), 1.0);
        assert_eq!(p.config().ease, Ease::Smoothstep);
    }

    #[test]
    fn test_sample_iter_spacing() {
        let p = profile();
        let samples: Vec<f64> = p.sample_iter(100).collect();
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[20], p.value(5000.0));
        assert_eq!(p.sample_iter(0).count(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_from_entropy_builds() {
        let p = SpeedProfile::from_entropy(400.0, 10000.0).unwrap();
        assert_eq!(p.normal_value(RAMP_MS), 1.0);
    }
}

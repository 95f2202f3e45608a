#![cfg_attr(not(feature = "std"), no_std)]

//! Deterministic throughput curves for progress animations.
//!
//! Everything is seeded: a [`SpeedProfile`] built twice from the same seed and
//! parameters answers every query identically.
//!
//! ```rust
//! use ratecurve_core::SpeedProfile;
//!
//! let profile = SpeedProfile::new(400.0, 10000.0, 42).unwrap();
//! assert_eq!(profile.total_time(), 25000.0);
//! assert_eq!(profile.normal_value(0.0), 0.0);
//! assert_eq!(profile.normal_value(5000.0), 1.0);
//! ```

pub mod curve;
pub mod download;
pub mod ease;
pub mod error;
mod math;
pub mod noise;
pub mod profile;
pub mod rng;

pub use curve::Curve;
pub use download::{Action, Download, DownloadState};
pub use ease::{lerp, map, Ease};
pub use error::{NoiseError, Result};
pub use noise::{GradientNoise1D, ValueNoise1D};
pub use profile::{Phase, ProfileConfig, SpeedProfile, RAMP_MS};
pub use rng::Lcg;

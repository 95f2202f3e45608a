use thiserror::Error;

/// Result type used by `ratecurve-core`.
pub type Result<T> = core::result::Result<T, NoiseError>;

/// Precondition violations raised by the engine.
///
/// Every variant is raised synchronously at the point where the bad input is
/// first seen. None of them are transient.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoiseError {
    #[error("seed {seed} must be less than {modulus}")]
    InvalidSeed { seed: u64, modulus: u64 },

    #[error("interpolation parameter {t} is outside [0, 1]")]
    InvalidArgument { t: f64 },

    #[error("cannot map {val} from [{low1}, {high1}] to [{low2}, {high2}]")]
    InvalidRangeMapping {
        val: f64,
        low1: f64,
        high1: f64,
        low2: f64,
        high2: f64,
    },

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidProfile { field: &'static str, value: f64 },
}

#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// Ease curve used by the steady-phase noise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EaseSetting {
    Cosine,
    #[default]
    Smoothstep,
    Decel,
}

impl EaseSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            EaseSetting::Cosine => "cosine",
            EaseSetting::Smoothstep => "smoothstep",
            EaseSetting::Decel => "decel",
        }
    }
}

/// Parameters for one simulated download
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileSettings {
    /// Target speed in units per second
    pub speed: f64,
    /// Total units to transfer
    pub size: f64,
    pub seed: u64,
    pub ease: EaseSetting,
    /// Points to sample across the whole transfer
    pub samples: usize,
    /// Clock step between progress ticks, in milliseconds
    pub tick_ms: f64,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            speed: 400.0,
            size: 10000.0,
            seed: 0,
            ease: EaseSetting::Smoothstep,
            samples: 100,
            tick_ms: 250.0,
        }
    }
}

#[cfg(feature = "std")]
impl ProfileSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One sampled point of a speed curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub elapsed_ms: f64,
    pub normal_value: f64,
    pub value: f64,
}

/// Snapshot of a simulated download after a tick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    pub ticks: u32,
    pub elapsed_ms: f64,
    pub downloaded: f64,
    pub size: f64,
    pub percent: u32,
    /// Speed at `elapsed_ms`, in units per second
    pub speed: f64,
    pub running: bool,
}

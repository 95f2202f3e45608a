//! Headless driver for ratecurve profiles.
//!
//! Turns [`ProfileSettings`] into profiles, sampled curves and simulated
//! download runs. The binary in `main.rs` only parses arguments and prints.

use std::path::Path;

use anyhow::{Context, Result};
use ratecurve_core::{Action, Download, Ease, SpeedProfile};
use ratecurve_shared::{CurvePoint, EaseSetting, ProfileSettings, ProgressReport};
use serde::Serialize;

/// Sampled curve plus its value range
#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    pub total_time_ms: f64,
    pub min: f64,
    pub max: f64,
    pub points: Vec<CurvePoint>,
}

pub fn ease_from_setting(setting: EaseSetting) -> Ease {
    match setting {
        EaseSetting::Cosine => Ease::Cosine,
        EaseSetting::Smoothstep => Ease::Smoothstep,
        EaseSetting::Decel => Ease::Decel,
    }
}

/// Read settings from a JSON file, or fall back to defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<ProfileSettings> {
    let Some(path) = path else {
        return Ok(ProfileSettings::default());
    };

    log::debug!("Loading settings from {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    ProfileSettings::from_json(&json)
        .with_context(|| format!("Invalid settings in {}", path.display()))
}

pub fn build_profile(settings: &ProfileSettings) -> Result<SpeedProfile> {
    let config = ratecurve_core::ProfileConfig {
        ease: ease_from_setting(settings.ease),
        ..Default::default()
    };
    let profile = SpeedProfile::with_config(settings.speed, settings.size, settings.seed, config)
        .context("Failed to build speed profile")?;

    log::debug!(
        "Profile: {} units at {} units/s, seed {}, total time {} ms",
        settings.size,
        settings.speed,
        settings.seed,
        profile.total_time()
    );
    Ok(profile)
}

/// Sample `samples` evenly spaced points over the whole transfer.
pub fn sample_curve(profile: &SpeedProfile, samples: usize) -> CurveReport {
    let step = if samples == 0 {
        0.0
    } else {
        profile.total_time() / samples as f64
    };

    let points: Vec<CurvePoint> = profile
        .sample_iter(samples)
        .enumerate()
        .map(|(i, value)| {
            let elapsed_ms = i as f64 * step;
            CurvePoint {
                elapsed_ms,
                normal_value: profile.normal_value(elapsed_ms),
                value,
            }
        })
        .collect();

    let (min, max) = points
        .iter()
        .map(|p| p.value)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0));

    CurveReport {
        total_time_ms: profile.total_time(),
        min,
        max,
        points,
    }
}

/// Run a download to completion on a virtual clock advancing `tick_ms` per step.
///
/// Stops early after `max_ticks` ticks when given.
pub fn simulate(settings: &ProfileSettings, max_ticks: Option<u32>) -> Result<Vec<ProgressReport>> {
    if !(settings.tick_ms.is_finite() && settings.tick_ms > 0.0) {
        anyhow::bail!("tick_ms must be positive, got {}", settings.tick_ms);
    }

    let mut download = Download::new(build_profile(settings)?);
    download.dispatch(Action::SetStartTime(0.0));
    download.dispatch(Action::Start);

    let mut reports = Vec::new();
    let mut now = 0.0;
    while download.state().running {
        if max_ticks.is_some_and(|max| download.state().ticks >= max) {
            log::info!("Stopping after {} ticks", download.state().ticks);
            break;
        }
        now += settings.tick_ms;
        download.dispatch(Action::Tick(now));
        reports.push(report(&download));
    }

    if download.is_complete() {
        log::info!("Download complete after {} ms", now);
    }
    Ok(reports)
}

fn report(download: &Download) -> ProgressReport {
    let state = download.state();
    ProgressReport {
        ticks: state.ticks,
        elapsed_ms: state.elapsed,
        downloaded: state.downloaded,
        size: download.profile().file_size(),
        percent: download.percent_done(),
        speed: download.profile().value(state.elapsed),
        running: state.running,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_mapping() {
        assert_eq!(ease_from_setting(EaseSetting::Cosine), Ease::Cosine);
        assert_eq!(ease_from_setting(EaseSetting::Decel), Ease::Decel);
    }

    #[test]
    fn test_sample_curve_extent() {
        let profile = build_profile(&ProfileSettings::default()).unwrap();
        let report = sample_curve(&profile, 100);
        assert_eq!(report.points.len(), 100);
        assert_eq!(report.min, 0.0);
        assert!(report.max >= 400.0);
        assert_eq!(report.points[20].elapsed_ms, 5000.0);
        assert_eq!(report.points[20].normal_value, 1.0);
    }

    #[test]
    fn test_empty_curve() {
        let profile = build_profile(&ProfileSettings::default()).unwrap();
        let report = sample_curve(&profile, 0);
        assert!(report.points.is_empty());
        assert_eq!((report.min, report.max), (0.0, 0.0));
    }

    #[test]
    fn test_simulate_rejects_bad_tick() {
        let settings = ProfileSettings {
            tick_ms: 0.0,
            ..Default::default()
        };
        assert!(simulate(&settings, None).is_err());
    }
}

//! Simulated download progress driven by a [`SpeedProfile`].
//!
//! A plain reducer over caller-supplied timestamps. Nothing here schedules
//! ticks; the host decides when to call [`Download::dispatch`].

use crate::math;
use crate::profile::SpeedProfile;

/// Events fed into a [`Download`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Start,
    /// Stop and reset all progress.
    Stop,
    /// Timestamp of the first tick, in milliseconds.
    SetStartTime(f64),
    /// Clock reading in milliseconds.
    Tick(f64),
}

/// Progress counters. Units match the profile's `size`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DownloadState {
    pub start_time: Option<f64>,
    pub elapsed: f64,
    pub ticks: u32,
    pub downloaded: f64,
    pub running: bool,
    /// Units added by the most recent tick.
    pub step_units: f64,
    last_tick: Option<f64>,
}

/// A download whose speed over time follows one profile.
#[derive(Debug, Clone)]
pub struct Download {
    profile: SpeedProfile,
    state: DownloadState,
}

impl Download {
    pub fn new(profile: SpeedProfile) -> Self {
        Self {
            profile,
            state: DownloadState::default(),
        }
    }

    pub fn profile(&self) -> &SpeedProfile {
        &self.profile
    }

    pub fn state(&self) -> &DownloadState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.downloaded >= self.profile.file_size()
    }

    /// Whole percent downloaded, 0..=100.
    pub fn percent_done(&self) -> u32 {
        math::round(self.state.downloaded / self.profile.file_size() * 100.0) as u32
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = &mut self.state;
        match action {
            Action::Start => {
                state.running = state.downloaded < self.profile.file_size();
            }
            Action::Stop => {
                *state = DownloadState::default();
            }
            Action::SetStartTime(time) => {
                state.start_time = Some(time);
                state.last_tick = Some(time);
            }
            Action::Tick(time) => {
                if !state.running {
                    return;
                }
                let start = *state.start_time.get_or_insert(time);
                let last = state.last_tick.unwrap_or(start);
                state.elapsed = (time - start).max(0.0);

                let dt_ms = (time - last).max(0.0);
                let size = self.profile.file_size();
                let step = self.profile.value(state.elapsed) * dt_ms / 1000.0;
                let downloaded = (state.downloaded + step).min(size);

                state.step_units = downloaded - state.downloaded;
                state.downloaded = downloaded;
                state.ticks += 1;
                state.last_tick = Some(time);
                if downloaded >= size {
                    state.running = false;
                }
            }
        }
    }
}

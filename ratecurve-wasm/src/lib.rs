use ratecurve_core::{Action, Download as CoreDownload, Ease, ProfileConfig, SpeedProfile};
use ratecurve_shared::{ProfileSettings, ProgressReport};
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format_args!($($t)*).to_string())))
}

fn js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_ease(name: Option<String>) -> Result<Ease, JsValue> {
    match name.as_deref() {
        None => Ok(Ease::default()),
        Some(name) => Ease::ALL
            .into_iter()
            .find(|ease| ease.name() == name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown ease '{}'", name))),
    }
}

// JS numbers arrive as f64; only whole non-negative values are valid seeds
fn parse_seed(seed: f64) -> Result<u64, JsValue> {
    if seed.is_finite() && seed >= 0.0 && seed.fract() == 0.0 {
        Ok(seed as u64)
    } else {
        Err(JsValue::from_str(&format!("seed must be a whole number, got {}", seed)))
    }
}

/// Speed curve handle for presentation code. Read-only after construction.
#[wasm_bindgen]
pub struct Profile {
    inner: SpeedProfile,
}

#[wasm_bindgen]
impl Profile {
    #[wasm_bindgen(constructor)]
    pub fn new(speed: f64, size: f64, seed: f64, ease: Option<String>) -> Result<Profile, JsValue> {
        let config = ProfileConfig {
            ease: parse_ease(ease)?,
            ..ProfileConfig::default()
        };
        let inner = SpeedProfile::with_config(speed, size, parse_seed(seed)?, config)
            .map_err(js_error)?;
        console_log!(
            "Created profile: {} units at {} units/s ({} ms)",
            size,
            speed,
            inner.total_time()
        );
        Ok(Profile { inner })
    }

    /// Build from a JSON settings object; missing fields take defaults.
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: &str) -> Result<Profile, JsValue> {
        let settings = ProfileSettings::from_json(json).map_err(js_error)?;
        Profile::new(
            settings.speed,
            settings.size,
            settings.seed as f64,
            Some(settings.ease.as_str().to_string()),
        )
    }

    #[wasm_bindgen(js_name = normalValue)]
    pub fn normal_value(&self, elapsed_ms: f64) -> f64 {
        self.inner.normal_value(elapsed_ms)
    }

    pub fn value(&self, elapsed_ms: f64) -> f64 {
        self.inner.value(elapsed_ms)
    }

    #[wasm_bindgen(getter, js_name = totalTime)]
    pub fn total_time(&self) -> f64 {
        self.inner.total_time()
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f64 {
        self.inner.speed()
    }

    #[wasm_bindgen(getter, js_name = fileSize)]
    pub fn file_size(&self) -> f64 {
        self.inner.file_size()
    }

    /// `count` speeds evenly spaced over the whole transfer.
    pub fn sample(&self, count: usize) -> Vec<f64> {
        self.inner.sample_iter(count).collect()
    }
}

/// Simulated download following a [`Profile`]
#[wasm_bindgen]
pub struct Download {
    inner: CoreDownload,
}

#[wasm_bindgen]
impl Download {
    #[wasm_bindgen(constructor)]
    pub fn new(profile: &Profile) -> Download {
        Download {
            inner: CoreDownload::new(profile.inner.clone()),
        }
    }

    pub fn start(&mut self) {
        self.inner.dispatch(Action::Start);
    }

    pub fn stop(&mut self) {
        self.inner.dispatch(Action::Stop);
    }

    #[wasm_bindgen(js_name = setStartTime)]
    pub fn set_start_time(&mut self, time_ms: f64) {
        self.inner.dispatch(Action::SetStartTime(time_ms));
    }

    pub fn tick(&mut self, time_ms: f64) {
        let was_running = self.inner.state().running;
        self.inner.dispatch(Action::Tick(time_ms));
        if was_running && self.inner.is_complete() {
            console_log!("Download finished after {} ticks", self.inner.state().ticks);
        }
    }

    /// Tick with the current wall-clock time.
    #[wasm_bindgen(js_name = tickNow)]
    pub fn tick_now(&mut self) {
        self.tick(js_sys::Date::now());
    }

    #[wasm_bindgen(getter)]
    pub fn downloaded(&self) -> f64 {
        self.inner.state().downloaded
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner.state().running
    }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 {
        self.inner.state().ticks
    }

    #[wasm_bindgen(js_name = percentDone)]
    pub fn percent_done(&self) -> u32 {
        self.inner.percent_done()
    }

    /// Current progress as a JSON `ProgressReport`.
    pub fn report(&self) -> Result<String, JsValue> {
        let state = self.inner.state();
        let report = ProgressReport {
            ticks: state.ticks,
            elapsed_ms: state.elapsed,
            downloaded: state.downloaded,
            size: self.inner.profile().file_size(),
            percent: self.inner.percent_done(),
            speed: self.inner.profile().value(state.elapsed),
            running: state.running,
        };
        serde_json::to_string(&report).map_err(js_error)
    }
}

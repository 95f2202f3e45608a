use crate::profile::SpeedProfile;

/// Fixed-capacity run of speeds sampled evenly over a whole transfer
///
/// Point `i` holds `value(i * step_ms)`, where `step_ms = total_time / N`.
#[derive(Debug, Clone)]
pub struct Curve<const N: usize> {
    pub points: heapless::Vec<f64, N>,
    pub step_ms: f64,
}

impl<const N: usize> Curve<N> {
    pub fn from_profile(profile: &SpeedProfile) -> Self {
        let mut points = heapless::Vec::new();
        for value in profile.sample_iter(N) {
            // sample_iter yields exactly N items
            let _ = points.push(value);
        }
        let step_ms = if N == 0 {
            0.0
        } else {
            profile.total_time() / N as f64
        };
        Self { points, step_ms }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Elapsed milliseconds of point `index`.
    pub fn elapsed_at(&self, index: usize) -> f64 {
        index as f64 * self.step_ms
    }

    /// `(elapsed_ms, value)` pairs in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.elapsed_at(i), v))
    }

    /// Smallest and largest sampled value, for axis scaling.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

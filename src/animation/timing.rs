use std::time::Duration;

use crate::{
    foundation::error::{StrokeError, StrokeResult},
    geometry::stroke::StrokeSet,
};

/// Drawing time per unit of stroke length used by [`AnimatorConfig::default`].
pub const DEFAULT_TIME_PER_UNIT: Duration = Duration::from_millis(10);

/// How long each stroke takes to draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationMode {
    /// Split a fixed total across strokes in proportion to their lengths.
    FixedTotal(#[serde(with = "millis")] Duration),
    /// Each stroke takes its length times this rate; busier characters take longer.
    PerUnitLength(#[serde(with = "millis")] Duration),
}

/// Options for one animation run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Stroke pacing.
    pub duration_mode: DurationMode,
    /// Time before the first stroke starts moving.
    #[serde(with = "millis")]
    pub start_delay: Duration,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration_mode: DurationMode::PerUnitLength(DEFAULT_TIME_PER_UNIT),
            start_delay: Duration::ZERO,
        }
    }
}

impl AnimatorConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(s: &str) -> StrokeResult<Self> {
        serde_json::from_str(s).map_err(|e| StrokeError::serde(e.to_string()))
    }
}

/// Where a run is: the current stroke and how much of it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Progress {
    /// Index of the stroke being drawn; equals the stroke count once everything is drawn.
    pub stroke_index: usize,
    /// Drawn fraction of that stroke in `[0, 1]`.
    pub fraction: f64,
}

impl Progress {
    /// Nothing drawn yet.
    pub const START: Self = Self {
        stroke_index: 0,
        fraction: 0.0,
    };

    /// Everything drawn for a set of `stroke_count` strokes.
    pub fn finished(stroke_count: usize) -> Self {
        Self {
            stroke_index: stroke_count,
            fraction: 1.0,
        }
    }
}

/// Per-stroke durations of one run, laid end to end.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    durations: Vec<f64>,
    ends: Vec<f64>,
}

impl Timeline {
    /// Lay out `strokes` with the given pacing.
    pub fn new(strokes: &StrokeSet, mode: DurationMode) -> Self {
        let durations: Vec<f64> = match mode {
            DurationMode::PerUnitLength(rate) => {
                let rate = rate.as_secs_f64();
                strokes.iter().map(|s| s.length() * rate).collect()
            }
            DurationMode::FixedTotal(total) => {
                let total = total.as_secs_f64();
                let total_length = strokes.total_length();
                if total_length > 0.0 {
                    strokes
                        .iter()
                        .map(|s| total * s.length() / total_length)
                        .collect()
                } else {
                    let even = total / strokes.len().max(1) as f64;
                    vec![even; strokes.len()]
                }
            }
        };

        let mut ends = Vec::with_capacity(durations.len());
        let mut acc = 0.0;
        for d in &durations {
            acc += d;
            ends.push(acc);
        }
        if let (DurationMode::FixedTotal(total), Some(last)) = (mode, ends.last_mut()) {
            *last = total.as_secs_f64();
        }

        Self { durations, ends }
    }

    /// Number of strokes laid out.
    pub fn stroke_count(&self) -> usize {
        self.durations.len()
    }

    /// Drawing time of the whole run.
    pub fn total(&self) -> Duration {
        secs_to_duration(self.total_secs())
    }

    /// Drawing time of one stroke.
    pub fn stroke_duration(&self, index: usize) -> Option<Duration> {
        self.durations.get(index).copied().map(secs_to_duration)
    }

    fn total_secs(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Current stroke and its drawn fraction after `elapsed` drawing time.
    pub fn locate(&self, elapsed: Duration) -> Progress {
        let t = elapsed.as_secs_f64();
        if t >= self.total_secs() {
            return Progress::finished(self.stroke_count());
        }

        // Zero-duration strokes end where they begin and count as drawn.
        let index = self.ends.partition_point(|&end| end <= t);
        let begin = if index == 0 { 0.0 } else { self.ends[index - 1] };
        let duration = self.durations[index];
        let fraction = if duration > 0.0 {
            ((t - begin) / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Progress {
            stroke_index: index,
            fraction,
        }
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize as _, de::Error as _};

    pub(super) fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(d.as_secs_f64() * 1000.0)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ms = f64::deserialize(deserializer)?;
        if !ms.is_finite() || ms < 0.0 {
            return Err(D::Error::custom(
                "duration must be a finite, non-negative millisecond count",
            ));
        }
        Duration::try_from_secs_f64(ms / 1000.0).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;

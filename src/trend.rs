//! Momentum trend classification.
//!
//! Compares the mean of the most recent window of a series against the mean
//! of its opening window. A relative band around the opening mean counts as
//! stable.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use trueno::Vector;

/// Direction of a series' momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Recent values clearly above the opening values.
    Up,
    /// Recent values clearly below the opening values.
    Down,
    /// Within the stability band.
    #[default]
    Neutral,
}

impl Trend {
    /// Badge label shown next to the chart title.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "High Trend",
            Self::Down => "Cooling",
            Self::Neutral => "Stable",
        }
    }

    /// Get a display character for the trend direction.
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Up => "\u{2197}",      // ↗
            Self::Down => "\u{2198}",    // ↘
            Self::Neutral => "\u{2212}", // −
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        };
        write!(f, "{s}")
    }
}

/// Window and band used by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Number of values averaged at each end of the series.
    #[serde(default = "default_window")]
    pub window: usize,

    /// Relative band around the opening mean treated as stable (0.05 = ±5%).
    #[serde(default = "default_band")]
    pub band: f32,
}

fn default_window() -> usize {
    5
}
fn default_band() -> f32 {
    0.05
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            band: default_band(),
        }
    }
}

impl TrendConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a zero window, or a band that
    /// is not finite or outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidParameter {
                name: "trend.window",
                value: 0.0,
            });
        }

        if !(self.band.is_finite() && (0.0..1.0).contains(&self.band)) {
            return Err(Error::InvalidParameter {
                name: "trend.band",
                value: self.band,
            });
        }

        Ok(())
    }
}

/// Classify a series with the default window (5) and band (5%).
#[must_use]
pub fn classify(values: &[f32]) -> Trend {
    classify_with(values, &TrendConfig::default())
}

/// Classify a series with an explicit configuration.
///
/// Both windows hold `min(window, len)` values, so short series compare
/// overlapping windows. Empty input (or a zero window) is neutral.
#[must_use]
pub fn classify_with(values: &[f32], config: &TrendConfig) -> Trend {
    let window = config.window.min(values.len());
    if window == 0 {
        return Trend::Neutral;
    }

    let recent = window_mean(&values[values.len() - window..]);
    let previous = window_mean(&values[..window]);

    if recent > previous * (1.0 + config.band) {
        Trend::Up
    } else if recent < previous * (1.0 - config.band) {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

fn window_mean(window: &[f32]) -> f32 {
    Vector::from_vec(window.to_vec()).mean().unwrap_or(0.0)
}

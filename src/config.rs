//! Dashboard configuration.
//!
//! A single YAML document groups curve geometry, trend classification and
//! the visual theme. Every key is optional; missing keys take defaults.
//!
//! ```yaml
//! version: 1
//! chart:
//!   width: 100
//!   height: 40
//!   vertical_fill_fraction: 0.7
//!   top_padding: 5
//!   tension: 6
//! trend:
//!   window: 5
//!   band: 0.05
//! theme:
//!   accent: "#BEF264"
//! ```

use crate::curve::CurveConfig;
use crate::error::{Error, Result};
use crate::theme::ChartTheme;
use crate::trend::TrendConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Curve viewport and smoothing.
    #[serde(default)]
    pub chart: CurveConfig,

    /// Trend classification.
    #[serde(default)]
    pub trend: TrendConfig,

    /// Visual theme.
    #[serde(default)]
    pub theme: ChartTheme,
}

fn default_version() -> u32 {
    1
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            chart: CurveConfig::default(),
            trend: TrendConfig::default(),
            theme: ChartTheme::default(),
        }
    }
}

impl DashboardConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), theme = %config.theme.name, "loaded config");
        Ok(config)
    }

    /// Parses configuration from a YAML string and validates the chart and
    /// trend sections.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or the first
    /// validation error.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.chart.validate()?;
        config.trend.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }
}

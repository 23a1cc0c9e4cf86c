//! Visual theme for dashboard charts and tables.
//!
//! One theme is passed to every renderer instead of each variant hard-coding
//! its own palette. Colors are hex strings in configuration files.

use crate::color::Rgba;
use crate::standings::Zone;
use crate::trend::Trend;
use serde::{Deserialize, Serialize};

/// Colors for the league table zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneColors {
    /// League winner.
    #[serde(default = "default_champion")]
    pub champion: Rgba,
    /// Champions League places, one color each for positions 2, 3 and 4.
    #[serde(default = "default_ucl")]
    pub ucl: [Rgba; 3],
    /// Europa League place.
    #[serde(default = "default_uel")]
    pub uel: Rgba,
    /// Relegation places.
    #[serde(default = "default_relegation")]
    pub relegation: Rgba,
    /// Everyone else.
    #[serde(default = "default_mid_table")]
    pub mid_table: Rgba,
}

fn default_champion() -> Rgba {
    Rgba::rgb(0xef, 0x44, 0x44)
}
fn default_ucl() -> [Rgba; 3] {
    [
        Rgba::rgb(0x22, 0xd3, 0xee),
        Rgba::rgb(0xf9, 0x73, 0x16),
        Rgba::rgb(0x3b, 0x82, 0xf6),
    ]
}
fn default_uel() -> Rgba {
    Rgba::rgb(0x8b, 0x5c, 0xf6)
}
fn default_relegation() -> Rgba {
    Rgba::rgb(0xdc, 0x26, 0x26)
}
fn default_mid_table() -> Rgba {
    Rgba::rgb(0x52, 0x52, 0x5b)
}

impl Default for ZoneColors {
    fn default() -> Self {
        Self {
            champion: default_champion(),
            ucl: default_ucl(),
            uel: default_uel(),
            relegation: default_relegation(),
            mid_table: default_mid_table(),
        }
    }
}

impl ZoneColors {
    /// Color for a zone. Champions League uses its first place color.
    #[must_use]
    pub fn color(&self, zone: Zone) -> Rgba {
        match zone {
            Zone::Champion => self.champion,
            Zone::ChampionsLeague => self.ucl[0],
            Zone::EuropaLeague => self.uel,
            Zone::Relegation => self.relegation,
            Zone::MidTable => self.mid_table,
        }
    }

    /// Row accent for a 1-based table position.
    #[must_use]
    pub fn position_color(&self, position: u32) -> Rgba {
        match position {
            2..=4 => self.ucl[(position - 2) as usize],
            p => self.color(Zone::for_position(p)),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    /// Theme name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Curve stroke, area gradient and hover marker.
    #[serde(default = "default_accent")]
    pub accent: Rgba,

    /// Chart background; `None` renders transparent.
    #[serde(default = "default_background")]
    pub background: Option<Rgba>,

    /// Primary text.
    #[serde(default = "default_foreground")]
    pub foreground: Rgba,

    /// Secondary text (placeholders, badges).
    #[serde(default = "default_muted")]
    pub muted: Rgba,

    /// Reference and hover guide lines.
    #[serde(default = "default_guide")]
    pub guide: Rgba,

    /// Tooltip box fill.
    #[serde(default = "default_tooltip_fill")]
    pub tooltip_fill: Rgba,

    /// Tooltip box border.
    #[serde(default = "default_tooltip_border")]
    pub tooltip_border: Rgba,

    /// Badge color for a falling trend.
    #[serde(default = "default_trend_down")]
    pub trend_down: Rgba,

    /// League table zone colors.
    #[serde(default)]
    pub zones: ZoneColors,
}

fn default_name() -> String {
    "winmix-dark".to_string()
}
fn default_accent() -> Rgba {
    Rgba::rgb(0xbe, 0xf2, 0x64)
}
#[allow(clippy::unnecessary_wraps)]
fn default_background() -> Option<Rgba> {
    Some(Rgba::rgb(0x09, 0x09, 0x0b))
}
fn default_foreground() -> Rgba {
    Rgba::WHITE
}
fn default_muted() -> Rgba {
    Rgba::rgb(0x71, 0x71, 0x7a)
}
fn default_guide() -> Rgba {
    Rgba::WHITE.with_opacity(0.2)
}
fn default_tooltip_fill() -> Rgba {
    Rgba::rgb(0x09, 0x09, 0x0b).with_opacity(0.9)
}
fn default_tooltip_border() -> Rgba {
    Rgba::WHITE.with_opacity(0.1)
}
fn default_trend_down() -> Rgba {
    Rgba::rgb(0xf4, 0x3f, 0x5e)
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            name: default_name(),
            accent: default_accent(),
            background: default_background(),
            foreground: default_foreground(),
            muted: default_muted(),
            guide: default_guide(),
            tooltip_fill: default_tooltip_fill(),
            tooltip_border: default_tooltip_border(),
            trend_down: default_trend_down(),
            zones: ZoneColors::default(),
        }
    }
}

impl ChartTheme {
    /// Creates a new default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Badge color for a trend.
    #[must_use]
    pub fn trend_color(&self, trend: Trend) -> Rgba {
        match trend {
            Trend::Up => self.accent,
            Trend::Down => self.trend_down,
            Trend::Neutral => self.muted,
        }
    }
}

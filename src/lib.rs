//! # WinMix-Viz
//!
//! Smooth-curve momentum charts for the WinMix football dashboard.
//!
//! Turns an ordered series of per-match counts (for example "both teams to
//! score" outcomes) into SVG path geometry: a Catmull-Rom spline through
//! every sample, a closed area under it, and a nearest-point lookup for
//! pointer hover. Numeric reductions run on [trueno](https://crates.io/crates/trueno)
//! vectors.
//!
//! ## Quick Start
//!
//! ```rust
//! use winmix_viz::prelude::*;
//!
//! let renderer = CurveRenderer::new(CurveConfig::default())?;
//! let geometry = renderer.render_values(&[0.0, 10.0])?;
//!
//! assert!((geometry.points[1].y - 7.0).abs() < 1e-4);
//! assert!(geometry.area_path.ends_with(" L 100,40 L 0,40 Z"));
//! # Ok::<(), winmix_viz::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`curve`]: normalization, smooth and area paths, nearest point
//! - [`trend`]: rising, falling or stable series
//! - [`hover`]: pointer mapping and tooltip placement
//! - [`chart`]: complete BTTS chart as an SVG document
//! - [`standings`]: league table zones and records
//! - [`round`]: match slots picked for a round
//! - [`config`]: YAML dashboard configuration
//!
//! ## References
//!
//! - Catmull, E., & Rom, R. (1974). "A class of local interpolating splines."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and hex parsing.
pub mod color;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for coordinate mappings.
pub mod scale;

// ============================================================================
// Chart Modules
// ============================================================================

/// Smooth curve geometry.
pub mod curve;

/// Trend classification.
pub mod trend;

/// Pointer hover state.
pub mod hover;

/// BTTS momentum chart.
pub mod chart;

/// League standings table.
pub mod standings;

/// Match round selection.
pub mod round;

// ============================================================================
// Rendering and Configuration
// ============================================================================

/// Output encoders (SVG).
pub mod output;

/// Visual theme.
pub mod theme;

/// Dashboard configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for winmix-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use winmix_viz::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::chart::{BttsChart, BttsRecord, ChartHeader};
    pub use crate::color::Rgba;
    pub use crate::config::DashboardConfig;
    pub use crate::curve::{
        build_area_path, build_smooth_path, nearest_point, normalize, CurveConfig,
        CurveGeometry, CurveRenderer, NormalizedPoint, Sample,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::hover::HoverState;
    pub use crate::round::{MatchRound, MatchSlot, Side};
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::standings::{LeagueTeam, StandingsTable, Zone};
    pub use crate::theme::ChartTheme;
    pub use crate::trend::{classify, Trend, TrendConfig};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;

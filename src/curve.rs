//! Smooth curve geometry for momentum charts.
//!
//! Turns an ordered series of non-negative samples into:
//!
//! - a stroke path: a cubic Bezier spline through every sample,
//! - an area path: the stroke closed down to the bottom edge of the viewport,
//! - a nearest-point lookup for pointer hover.
//!
//! Paths are SVG path data in viewport units (`viewBox="0 0 width height"`).
//!
//! # Algorithms
//!
//! - **Catmull-Rom to Bezier**: for the segment `p1 -> p2` with neighbours
//!   `p0` and `p3`, the control points are `p1 + (p2 - p0) / k` and
//!   `p2 - (p3 - p1) / k`. With `k = 6` this is the uniform Catmull-Rom
//!   spline, which passes through every sample with a continuous tangent.
//!   The first and last samples stand in for their missing outer neighbour.
//!
//! # References
//!
//! - Catmull, E., & Rom, R. (1974). "A class of local interpolating splines."
//!   *Computer Aided Geometric Design*, 317-326.

use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;
use trueno::Vector;

/// Default viewport width in viewport units.
pub const DEFAULT_WIDTH: f32 = 100.0;
/// Default viewport height in viewport units.
pub const DEFAULT_HEIGHT: f32 = 40.0;
/// Default fraction of the height used for value variation.
pub const DEFAULT_VERTICAL_FILL_FRACTION: f32 = 0.7;
/// Default offset reserved at the top of the viewport.
pub const DEFAULT_TOP_PADDING: f32 = 5.0;
/// Default Bezier tension divisor (uniform Catmull-Rom).
pub const DEFAULT_TENSION: f32 = 6.0;

/// Floor for the value range so a flat or all-zero series still maps.
const MIN_VALUE_RANGE: f32 = 1.0;

// ============================================================================
// Data Model
// ============================================================================

/// One scalar measurement in an ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Position in the series.
    pub index: usize,
    /// Non-negative measurement (e.g. a BTTS count).
    pub value: f32,
}

impl Sample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(index: usize, value: f32) -> Self {
        Self { index, value }
    }

    /// Build an indexed series from raw values.
    #[must_use]
    pub fn series(values: &[f32]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Self::new(index, value))
            .collect()
    }
}

/// A sample mapped into viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPoint {
    /// Horizontal position in `[0, width]`.
    pub x: f32,
    /// Vertical position inside the padded band.
    pub y: f32,
    /// The sample value this point was computed from.
    pub value: f32,
    /// The sample's index in the source series.
    pub original_index: usize,
}

impl NormalizedPoint {
    /// The point's position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Viewport and smoothing parameters for a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Viewport width.
    #[serde(default = "default_width")]
    pub width: f32,

    /// Viewport height.
    #[serde(default = "default_height")]
    pub height: f32,

    /// Fraction of the height usable for value variation, in `(0, 1]`.
    #[serde(default = "default_vertical_fill_fraction")]
    pub vertical_fill_fraction: f32,

    /// Fixed offset subtracted from every y.
    #[serde(default = "default_top_padding")]
    pub top_padding: f32,

    /// Divisor applied to the neighbour-to-neighbour vector for control points.
    #[serde(default = "default_tension")]
    pub tension: f32,
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}
fn default_height() -> f32 {
    DEFAULT_HEIGHT
}
fn default_vertical_fill_fraction() -> f32 {
    DEFAULT_VERTICAL_FILL_FRACTION
}
fn default_top_padding() -> f32 {
    DEFAULT_TOP_PADDING
}
fn default_tension() -> f32 {
    DEFAULT_TENSION
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            vertical_fill_fraction: default_vertical_fill_fraction(),
            top_padding: default_top_padding(),
            tension: default_tension(),
        }
    }
}

impl CurveConfig {
    /// Create a configuration with default smoothing for the given viewport.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the vertical fill fraction.
    #[must_use]
    pub fn vertical_fill_fraction(mut self, fraction: f32) -> Self {
        self.vertical_fill_fraction = fraction;
        self
    }

    /// Set the top padding.
    #[must_use]
    pub fn top_padding(mut self, padding: f32) -> Self {
        self.top_padding = padding;
        self
    }

    /// Set the Bezier tension divisor.
    #[must_use]
    pub fn tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for non-positive or non-finite
    /// width/height, and [`Error::InvalidParameter`] for a fill fraction
    /// outside `(0, 1]`, a negative or non-finite padding, or a non-positive
    /// tension.
    pub fn validate(&self) -> Result<()> {
        let dimension_ok = |v: f32| v.is_finite() && v > 0.0;
        if !dimension_ok(self.width) || !dimension_ok(self.height) {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let fraction = self.vertical_fill_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "vertical_fill_fraction",
                value: fraction,
            });
        }

        if !(self.top_padding.is_finite() && self.top_padding >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "top_padding",
                value: self.top_padding,
            });
        }

        if !(self.tension.is_finite() && self.tension > 0.0) {
            return Err(Error::InvalidParameter {
                name: "tension",
                value: self.tension,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Map samples into the viewport.
///
/// `x` spreads the samples evenly over `[0, width]` (a single sample sits at
/// `x = 0`). `y` anchors the baseline at zero and scales by the series
/// maximum, floored at 1:
///
/// `y = height - value / max * height * vertical_fill_fraction - top_padding`
///
/// Output order and length match the input; empty input yields an empty vec.
#[must_use]
pub fn normalize(
    samples: &[Sample],
    width: f32,
    height: f32,
    vertical_fill_fraction: f32,
    top_padding: f32,
) -> Vec<NormalizedPoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let min_value = 0.0;
    let max_value = series_max(samples).max(MIN_VALUE_RANGE);
    let range = max_value - min_value;
    let band = height * vertical_fill_fraction;
    let last = samples.len() - 1;

    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let x = if last > 0 {
                (i as f32 / last as f32) * width
            } else {
                0.0
            };
            let y = height - ((sample.value - min_value) / range) * band - top_padding;

            NormalizedPoint {
                x,
                y,
                value: sample.value,
                original_index: sample.index,
            }
        })
        .collect()
}

/// Largest sample value (SIMD reduction).
fn series_max(samples: &[Sample]) -> f32 {
    let values: Vec<f32> = samples.iter().map(|s| s.value).collect();
    Vector::from_vec(values).max().unwrap_or(MIN_VALUE_RANGE)
}

/// Build a smooth stroke path through every point with the default tension.
///
/// - 0 points: empty string
/// - 1 point: a single `M x,y`
/// - otherwise `M` followed by one `C` segment per consecutive pair
#[must_use]
pub fn build_smooth_path(points: &[NormalizedPoint]) -> String {
    build_smooth_path_with_tension(points, DEFAULT_TENSION)
}

/// Build a smooth stroke path with an explicit tension divisor.
#[must_use]
pub fn build_smooth_path_with_tension(points: &[NormalizedPoint], tension: f32) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut d = String::with_capacity(16 + points.len() * 48);
    let _ = write!(d, "M {},{}", first.x, first.y);

    for i in 0..points.len().saturating_sub(1) {
        let p0 = if i > 0 { points[i - 1] } else { points[0] }.position();
        let p1 = points[i].position();
        let p2 = points[i + 1].position();
        let p3 = points.get(i + 2).map_or(p2, NormalizedPoint::position);

        let cp1 = p1 + (p2 - p0) / tension;
        let cp2 = p2 - (p3 - p1) / tension;

        let _ = write!(
            d,
            " C {},{} {},{} {},{}",
            cp1.x, cp1.y, cp2.x, cp2.y, p2.x, p2.y
        );
    }

    d
}

/// Close a stroke path down to the bottom edge for a filled area.
///
/// Appends `L width,height L 0,height Z`. An empty stroke path means no data
/// and yields an empty area path.
#[must_use]
pub fn build_area_path(curve_path: &str, width: f32, height: f32) -> String {
    if curve_path.is_empty() {
        return String::new();
    }

    let mut d = String::with_capacity(curve_path.len() + 32);
    d.push_str(curve_path);
    let _ = write!(d, " L {width},{height} L 0,{height} Z");
    d
}

/// Find the point horizontally closest to `pointer_x`.
///
/// Ties resolve to the earliest point in sequence order. Returns `None` for
/// an empty slice.
#[must_use]
pub fn nearest_point(points: &[NormalizedPoint], pointer_x: f32) -> Option<&NormalizedPoint> {
    let mut iter = points.iter();
    let mut best = iter.next()?;
    let mut best_distance = (best.x - pointer_x).abs();

    for point in iter {
        let distance = (point.x - pointer_x).abs();
        // Strict comparison keeps the earlier point on ties
        if distance < best_distance {
            best = point;
            best_distance = distance;
        }
    }

    Some(best)
}

// ============================================================================
// Renderer
// ============================================================================

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveGeometry {
    /// Normalized points in series order.
    pub points: Vec<NormalizedPoint>,
    /// Stroke path data.
    pub stroke_path: String,
    /// Closed area path data.
    pub area_path: String,
    /// Viewport width the geometry was computed for.
    pub width: f32,
    /// Viewport height the geometry was computed for.
    pub height: f32,
}

impl CurveGeometry {
    /// No samples were rendered; callers should show a placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of rendered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Nearest point to a horizontal viewport coordinate.
    #[must_use]
    pub fn nearest(&self, pointer_x: f32) -> Option<&NormalizedPoint> {
        nearest_point(&self.points, pointer_x)
    }
}

/// Validating front end over the geometry functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveRenderer {
    config: CurveConfig,
}

impl CurveRenderer {
    /// Create a renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: CurveConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected curve configuration");
            return Err(e);
        }
        Ok(Self { config })
    }

    /// The renderer's configuration.
    #[must_use]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Compute stroke, area and points for a series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSample`] if any value is negative or not finite.
    pub fn render(&self, samples: &[Sample]) -> Result<CurveGeometry> {
        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.value.is_finite() && s.value >= 0.0))
        {
            tracing::warn!(index, value = sample.value, "rejected sample");
            return Err(Error::InvalidSample {
                index,
                value: sample.value,
            });
        }

        let CurveConfig {
            width,
            height,
            vertical_fill_fraction,
            top_padding,
            tension,
        } = self.config;

        let points = normalize(samples, width, height, vertical_fill_fraction, top_padding);
        let stroke_path = build_smooth_path_with_tension(&points, tension);
        let area_path = build_area_path(&stroke_path, width, height);

        tracing::debug!(
            samples = samples.len(),
            width,
            height,
            "rendered curve geometry"
        );

        Ok(CurveGeometry {
            points,
            stroke_path,
            area_path,
            width,
            height,
        })
    }

    /// Render raw values, indexing them by position.
    ///
    /// # Errors
    ///
    /// Same as [`CurveRenderer::render`].
    pub fn render_values(&self, values: &[f32]) -> Result<CurveGeometry> {
        self.render(&Sample::series(values))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points_for(values: &[f32]) -> Vec<NormalizedPoint> {
        normalize(
            &Sample::series(values),
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_VERTICAL_FILL_FRACTION,
            DEFAULT_TOP_PADDING,
        )
    }

    #[test]
    fn test_normalize_empty() {
        assert!(points_for(&[]).is_empty());
        assert_eq!(build_smooth_path(&[]), "");
    }

    #[test]
    fn test_normalize_single_point_at_origin_x() {
        let points = points_for(&[3.0]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
        // max == value, so the point sits at the top of the band
        assert_relative_eq!(points[0].y, 40.0 - 28.0 - 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_normalize_four_samples_x_positions() {
        let points = points_for(&[6.0, 7.0, 5.0, 8.0]);
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();

        assert_eq!(xs.len(), 4);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], 33.333_33, epsilon = 1e-3);
        assert_relative_eq!(xs[2], 66.666_67, epsilon = 1e-3);
        assert_relative_eq!(xs[3], 100.0);
    }

    #[test]
    fn test_normalize_preserves_values_and_indices() {
        let points = points_for(&[6.0, 7.0, 5.0, 8.0]);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.original_index, i);
        }
        assert_eq!(points[3].value, 8.0);
    }

    #[test]
    fn test_normalize_flat_series_is_horizontal() {
        let points = points_for(&[5.0, 5.0, 5.0, 5.0]);
        let expected = 40.0 - 40.0 * 0.7 - 5.0;
        for p in &points {
            assert_relative_eq!(p.y, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_normalize_all_zero_uses_range_floor() {
        let points = points_for(&[0.0, 0.0, 0.0]);
        for p in &points {
            assert!(p.y.is_finite());
            assert_relative_eq!(p.y, 35.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_normalize_small_values_below_floor() {
        // Max 0.5 is floored to 1, so 0.5 fills only half the band
        let points = points_for(&[0.0, 0.5]);
        assert_relative_eq!(points[1].y, 40.0 - 0.5 * 28.0 - 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_normalize_increasing_series_decreasing_y() {
        let points = points_for(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for pair in points.windows(2) {
            assert!(pair[1].y < pair[0].y, "{} !< {}", pair[1].y, pair[0].y);
        }
    }

    #[test]
    fn test_smooth_path_single_point_is_move_only() {
        let points = points_for(&[2.0]);
        let d = build_smooth_path(&points);
        assert!(d.starts_with("M 0,"));
        assert!(!d.contains('C'));
    }

    #[test]
    fn test_smooth_path_two_points_single_cubic() {
        let points = vec![
            NormalizedPoint { x: 0.0, y: 30.0, value: 0.0, original_index: 0 },
            NormalizedPoint { x: 60.0, y: 0.0, value: 1.0, original_index: 1 },
        ];
        let d = build_smooth_path(&points);

        // Neighbours duplicated at both ends: cp1 = p1 + (p2 - p1)/6, cp2 = p2 - (p2 - p1)/6
        assert_eq!(d, "M 0,30 C 10,25 50,5 60,0");
        assert_eq!(d.matches('C').count(), 1);
    }

    #[test]
    fn test_smooth_path_interior_control_points() {
        let points = vec![
            NormalizedPoint { x: 0.0, y: 0.0, value: 0.0, original_index: 0 },
            NormalizedPoint { x: 6.0, y: 12.0, value: 0.0, original_index: 1 },
            NormalizedPoint { x: 12.0, y: 0.0, value: 0.0, original_index: 2 },
        ];
        let d = build_smooth_path(&points);

        // Segment 0: p0 = p1 = (0,0), p2 = (6,12), p3 = (12,0)
        //   cp1 = (1,2), cp2 = (6,12) - (12,0)/6 = (4,12)
        // Segment 1: p0 = (0,0), p1 = (6,12), p2 = p3 = (12,0)
        //   cp1 = (6,12) + (12,0)/6 = (8,12), cp2 = (12,0) - (6,-12)/6 = (11,2)
        assert_eq!(d, "M 0,0 C 1,2 4,12 6,12 C 8,12 11,2 12,0");
    }

    #[test]
    fn test_smooth_path_tension_changes_control_points() {
        let points = vec![
            NormalizedPoint { x: 0.0, y: 30.0, value: 0.0, original_index: 0 },
            NormalizedPoint { x: 60.0, y: 0.0, value: 1.0, original_index: 1 },
        ];
        assert_eq!(
            build_smooth_path_with_tension(&points, 3.0),
            "M 0,30 C 20,20 40,10 60,0"
        );
    }

    #[test]
    fn test_smooth_path_starts_at_first_point() {
        let points = points_for(&[6.0, 7.0, 5.0, 8.0]);
        let d = build_smooth_path(&points);
        assert!(d.starts_with(&format!("M {},{}", points[0].x, points[0].y)));
        assert_eq!(d.matches(" C ").count(), 3);
        assert!(d.ends_with(&format!("{},{}", points[3].x, points[3].y)));
    }

    #[test]
    fn test_area_path_closes_to_bottom() {
        let points = points_for(&[6.0, 7.0, 5.0, 8.0]);
        let stroke = build_smooth_path(&points);
        let area = build_area_path(&stroke, 100.0, 40.0);

        assert!(area.starts_with(&stroke));
        assert!(area.ends_with(" L 100,40 L 0,40 Z"));
    }

    #[test]
    fn test_area_path_empty_for_no_data() {
        assert_eq!(build_area_path("", 100.0, 40.0), "");
    }

    #[test]
    fn test_nearest_point_basic() {
        let points = points_for(&[6.0, 7.0, 5.0, 8.0]);
        assert_eq!(nearest_point(&points, 30.0).unwrap().original_index, 1);
        assert_eq!(nearest_point(&points, -50.0).unwrap().original_index, 0);
        assert_eq!(nearest_point(&points, 500.0).unwrap().original_index, 3);
    }

    #[test]
    fn test_nearest_point_tie_prefers_earlier() {
        let points = points_for(&[1.0, 2.0, 3.0]);
        // x = 0, 50, 100; 25 is equidistant from 0 and 50
        assert_eq!(nearest_point(&points, 25.0).unwrap().original_index, 0);
        assert_eq!(nearest_point(&points, 75.0).unwrap().original_index, 1);
    }

    #[test]
    fn test_nearest_point_empty() {
        assert!(nearest_point(&[], 10.0).is_none());
    }

    #[test]
    fn test_nearest_point_deterministic() {
        let points = points_for(&[4.0, 1.0, 9.0, 2.0, 2.0]);
        let a = nearest_point(&points, 41.0).copied();
        let b = nearest_point(&points, 41.0).copied();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_validate() {
        assert!(CurveConfig::default().validate().is_ok());
        assert!(CurveConfig::new(0.0, 40.0).validate().is_err());
        assert!(CurveConfig::new(100.0, -1.0).validate().is_err());
        assert!(CurveConfig::new(f32::NAN, 40.0).validate().is_err());
        assert!(CurveConfig::default().vertical_fill_fraction(0.0).validate().is_err());
        assert!(CurveConfig::default().vertical_fill_fraction(1.5).validate().is_err());
        assert!(CurveConfig::default().vertical_fill_fraction(1.0).validate().is_ok());
        assert!(CurveConfig::default().top_padding(-1.0).validate().is_err());
        assert!(CurveConfig::default().tension(0.0).validate().is_err());
    }

    #[test]
    fn test_renderer_rejects_bad_config() {
        let result = CurveRenderer::new(CurveConfig::new(-100.0, 40.0));
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_renderer_rejects_bad_samples() {
        let renderer = CurveRenderer::default();
        let nan = renderer.render_values(&[1.0, f32::NAN]);
        assert!(matches!(nan, Err(Error::InvalidSample { index: 1, .. })));

        let negative = renderer.render_values(&[-2.0]);
        assert!(matches!(negative, Err(Error::InvalidSample { index: 0, .. })));
    }

    #[test]
    fn test_renderer_empty_is_no_data() {
        let geometry = CurveRenderer::default().render(&[]).unwrap();
        assert!(geometry.is_empty());
        assert_eq!(geometry.stroke_path, "");
        assert_eq!(geometry.area_path, "");
        assert!(geometry.nearest(10.0).is_none());
    }

    #[test]
    fn test_renderer_matches_free_functions() {
        let values = [6.0, 7.0, 5.0, 8.0];
        let geometry = CurveRenderer::default().render_values(&values).unwrap();
        let points = points_for(&values);

        assert_eq!(geometry.points, points);
        assert_eq!(geometry.stroke_path, build_smooth_path(&points));
        assert_eq!(
            geometry.area_path,
            build_area_path(&geometry.stroke_path, 100.0, 40.0)
        );
        assert_eq!(geometry.len(), 4);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: CurveConfig = serde_yaml_ng::from_str("tension: 4.0").unwrap();
        assert_eq!(config.tension, 4.0);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.vertical_fill_fraction, DEFAULT_VERTICAL_FILL_FRACTION);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn samples_strategy() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(0.0f32..1000.0, 0..64)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// One point per sample, x non-decreasing and spanning the width
        #[test]
        fn prop_normalize_spans_width(
            values in samples_strategy(),
            width in 1.0f32..2000.0,
            height in 1.0f32..2000.0,
        ) {
            let points = normalize(&Sample::series(&values), width, height, 0.7, 5.0);
            prop_assert_eq!(points.len(), values.len());

            for pair in points.windows(2) {
                prop_assert!(pair[1].x >= pair[0].x);
            }
            if let Some(first) = points.first() {
                prop_assert_eq!(first.x, 0.0);
            }
            if points.len() > 1 {
                let last = points[points.len() - 1].x;
                prop_assert!((last - width).abs() <= width * 1e-5);
            }
        }

        /// y stays inside the padded band for any value range
        #[test]
        fn prop_normalize_y_in_band(
            values in samples_strategy(),
            fraction in 0.05f32..1.0,
            padding in 0.0f32..10.0,
        ) {
            let height = 40.0;
            let points = normalize(&Sample::series(&values), 100.0, height, fraction, padding);
            let top = height - height * fraction - padding;
            let bottom = height - padding;

            for p in &points {
                prop_assert!(p.y.is_finite());
                prop_assert!(p.y >= top - 1e-3, "y {} above band {}", p.y, top);
                prop_assert!(p.y <= bottom + 1e-3, "y {} below band {}", p.y, bottom);
            }
        }

        /// One cubic segment per consecutive pair, starting at the first point
        #[test]
        fn prop_smooth_path_segment_count(values in samples_strategy()) {
            let points = normalize(&Sample::series(&values), 100.0, 40.0, 0.7, 5.0);
            let d = build_smooth_path(&points);

            if let Some(first) = points.first() {
                let expected_start = format!("M {},{}", first.x, first.y);
                prop_assert!(d.starts_with(&expected_start));
            } else {
                prop_assert!(d.is_empty());
            }
            prop_assert_eq!(d.matches(" C ").count(), points.len().saturating_sub(1));
        }

        /// The chosen point is never farther than any other point
        #[test]
        fn prop_nearest_is_minimal(values in samples_strategy(), pointer in -50.0f32..150.0) {
            let points = normalize(&Sample::series(&values), 100.0, 40.0, 0.7, 5.0);
            match nearest_point(&points, pointer) {
                None => prop_assert!(points.is_empty()),
                Some(best) => {
                    let best_distance = (best.x - pointer).abs();
                    for p in &points {
                        prop_assert!((p.x - pointer).abs() >= best_distance);
                    }
                    // Earliest among equals
                    let first_min = points
                        .iter()
                        .find(|p| (p.x - pointer).abs() == best_distance)
                        .map(|p| p.original_index);
                    prop_assert_eq!(first_min, Some(best.original_index));
                }
            }
        }
    }
}

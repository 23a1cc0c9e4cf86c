//! BTTS momentum chart.
//!
//! Combines the curve geometry, trend classification and hover state into a
//! single SVG document. The viewBox is the curve viewport and the document
//! is stretched over the host container, so strokes are non-scaling.

use crate::color::Rgba;
use crate::config::DashboardConfig;
use crate::curve::{CurveGeometry, CurveRenderer};
use crate::error::Result;
use crate::hover::{tooltip_rect, HoverState, TOOLTIP_HEIGHT, TOOLTIP_WIDTH};
use crate::output::{
    Fill, GradientStop, LineCap, LinearGradient, SvgElement, SvgEncoder, TextAnchor,
};
use crate::theme::ChartTheme;
use crate::trend::{classify_with, Trend, TrendConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chart title.
pub const TITLE: &str = "BTTS Momentum";
/// Placeholder text for an empty series.
pub const NO_DATA_TEXT: &str = "No Data Available";

const FILL_GRADIENT_ID: &str = "chartFill";
const REFERENCE_OPACITY: f32 = 0.05;
const STROKE_WIDTH: f32 = 1.0;
const GUIDE_WIDTH: f32 = 0.5;
const MARKER_RADIUS: f32 = 1.5;
const MARKER_CORE_RADIUS: f32 = 0.8;
const TOOLTIP_FONT_SIZE: f32 = 5.0;

/// Pixel size per viewport unit when no size is set.
const DEFAULT_PIXELS_PER_UNIT: f32 = 8.0;

/// One match in the BTTS series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BttsRecord {
    /// Match identifier.
    pub match_id: String,
    /// Number of both-teams-to-score outcomes counted for the match.
    pub btts_count: u32,
    /// Match date, as given by the data source.
    #[serde(default)]
    pub date: Option<String>,
}

impl BttsRecord {
    /// Create a record without a date.
    #[must_use]
    pub fn new(match_id: impl Into<String>, btts_count: u32) -> Self {
        Self {
            match_id: match_id.into(),
            btts_count,
            date: None,
        }
    }
}

/// Text shown above the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHeader {
    /// Chart title.
    pub title: &'static str,
    /// Sample count badge ("Last N").
    pub badge: String,
    /// Trend of the series.
    pub trend: Trend,
    /// Badge color for the trend.
    pub trend_color: Rgba,
}

/// A rendered-on-demand BTTS momentum chart.
#[derive(Debug, Clone)]
pub struct BttsChart {
    records: Vec<BttsRecord>,
    geometry: CurveGeometry,
    trend: Trend,
    theme: ChartTheme,
    width: u32,
    height: u32,
}

impl BttsChart {
    /// Build a chart with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration is rejected.
    pub fn new(records: Vec<BttsRecord>) -> Result<Self> {
        Self::with_config(records, &DashboardConfig::default())
    }

    /// Build a chart from records and a dashboard configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart or trend section of the configuration
    /// is invalid.
    pub fn with_config(records: Vec<BttsRecord>, config: &DashboardConfig) -> Result<Self> {
        let renderer = CurveRenderer::new(config.chart)?;
        config.trend.validate()?;
        let values: Vec<f32> = records.iter().map(|r| r.btts_count as f32).collect();
        let geometry = renderer.render_values(&values)?;
        let trend = classify_with(&values, &config.trend);

        tracing::debug!(records = records.len(), %trend, "built btts chart");

        Ok(Self {
            records,
            width: (geometry.width * DEFAULT_PIXELS_PER_UNIT).round() as u32,
            height: (geometry.height * DEFAULT_PIXELS_PER_UNIT).round() as u32,
            geometry,
            trend,
            theme: config.theme.clone(),
        })
    }

    /// Recompute the trend with a different window and band.
    ///
    /// # Errors
    ///
    /// Returns an error if the trend configuration is invalid.
    pub fn trend_config(mut self, config: &TrendConfig) -> Result<Self> {
        config.validate()?;
        let values: Vec<f32> = self.geometry.points.iter().map(|p| p.value).collect();
        self.trend = classify_with(&values, config);
        Ok(self)
    }

    /// Source records in series order.
    #[must_use]
    pub fn records(&self) -> &[BttsRecord] {
        &self.records
    }

    /// Curve geometry in viewport units.
    #[must_use]
    pub fn geometry(&self) -> &CurveGeometry {
        &self.geometry
    }

    /// Trend of the series.
    #[must_use]
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Rendered pixel size.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Header text.
    #[must_use]
    pub fn header(&self) -> ChartHeader {
        ChartHeader {
            title: TITLE,
            badge: format!("Last {}", self.records.len()),
            trend: self.trend,
            trend_color: self.theme.trend_color(self.trend),
        }
    }

    /// Move the hover to the point nearest a viewport x coordinate.
    pub fn hover_at(&self, state: &mut HoverState, viewport_x: f32) {
        state.on_pointer_move(&self.geometry.points, viewport_x);
    }

    /// Render the chart as an SVG document.
    #[must_use]
    pub fn render_svg(&self, hover: &HoverState) -> String {
        self.encoder(hover).render()
    }

    /// Render the chart to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P, hover: &HoverState) -> Result<()> {
        self.encoder(hover).write_to_file(path)
    }

    fn encoder(&self, hover: &HoverState) -> SvgEncoder {
        let CurveGeometry { width, height, .. } = self.geometry;
        let theme = &self.theme;

        let mut svg = SvgEncoder::new(width, height)
            .size(self.width, self.height)
            .stretch(true)
            .non_scaling_strokes(true)
            .background(theme.background);

        if self.geometry.is_empty() {
            svg.add_element(SvgElement::Text {
                x: width / 2.0,
                y: height / 2.0,
                text: NO_DATA_TEXT.to_string(),
                font_size: TOOLTIP_FONT_SIZE,
                fill: theme.muted,
                anchor: TextAnchor::Middle,
                monospace: false,
                bold: false,
            });
            return svg;
        }

        let accent = theme.accent;
        let mut svg = svg.gradient(LinearGradient::vertical(
            FILL_GRADIENT_ID,
            vec![
                GradientStop { offset: 0.0, color: accent.with_opacity(0.3) },
                GradientStop { offset: 0.5, color: accent.with_opacity(0.05) },
                GradientStop { offset: 1.0, color: accent.with_opacity(0.0) },
            ],
        ));

        // Reference line
        svg.add_element(SvgElement::Line {
            x1: 0.0,
            y1: height * 0.5,
            x2: width,
            y2: height * 0.5,
            stroke: theme.guide.with_opacity(REFERENCE_OPACITY),
            stroke_width: GUIDE_WIDTH,
            dash: Some((2.0, 2.0)),
        });

        svg.add_element(SvgElement::Path {
            d: self.geometry.area_path.clone(),
            fill: Some(Fill::Gradient(FILL_GRADIENT_ID.to_string())),
            stroke: None,
            stroke_width: 0.0,
            line_cap: LineCap::Butt,
        });
        svg.add_element(SvgElement::Path {
            d: self.geometry.stroke_path.clone(),
            fill: None,
            stroke: Some(accent),
            stroke_width: STROKE_WIDTH,
            line_cap: LineCap::Round,
        });

        if let Some(point) = hover.hovered() {
            self.push_hover(&mut svg, point.x, point.y, point.value);
        }

        svg
    }

    fn push_hover(&self, svg: &mut SvgEncoder, x: f32, y: f32, value: f32) {
        let theme = &self.theme;
        let height = self.geometry.height;

        svg.add_element(SvgElement::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: height,
            stroke: theme.guide,
            stroke_width: GUIDE_WIDTH,
            dash: Some((1.0, 1.0)),
        });
        svg.add_element(SvgElement::Circle {
            cx: x,
            cy: y,
            r: MARKER_RADIUS,
            fill: theme.accent,
        });
        svg.add_element(SvgElement::Circle {
            cx: x,
            cy: y,
            r: MARKER_CORE_RADIUS,
            fill: Rgba::WHITE,
        });

        let tooltip = tooltip_rect(x, self.geometry.width);
        svg.add_element(SvgElement::Group {
            translate: (tooltip.x, tooltip.y),
            children: vec![
                SvgElement::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: TOOLTIP_WIDTH,
                    height: TOOLTIP_HEIGHT,
                    rx: 2.0,
                    fill: Fill::Color(theme.tooltip_fill),
                    stroke: Some(theme.tooltip_border),
                    stroke_width: GUIDE_WIDTH,
                },
                SvgElement::Text {
                    x: TOOLTIP_WIDTH / 2.0,
                    y: 8.0,
                    text: value.to_string(),
                    font_size: TOOLTIP_FONT_SIZE,
                    fill: theme.foreground,
                    anchor: TextAnchor::Middle,
                    monospace: true,
                    bold: true,
                },
            ],
        });
    }
}

impl batuta_common::display::WithDimensions for BttsChart {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveConfig;
    use crate::error::Error;
    use batuta_common::display::WithDimensions;

    fn records(counts: &[u32]) -> Vec<BttsRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| BttsRecord::new(format!("m{i}"), c))
            .collect()
    }

    #[test]
    fn test_chart_geometry_from_records() {
        let chart = BttsChart::new(records(&[0, 10])).unwrap();
        let points = &chart.geometry().points;

        assert_eq!(points.len(), 2);
        assert!((points[0].y - 35.0).abs() < 1e-4);
        assert!((points[1].y - 7.0).abs() < 1e-4);
        assert_eq!(chart.pixel_size(), (800, 320));
    }

    #[test]
    fn test_chart_header() {
        let chart = BttsChart::new(records(&[1, 1, 1, 1, 1, 3, 3, 3, 3, 3])).unwrap();
        let header = chart.header();

        assert_eq!(header.title, "BTTS Momentum");
        assert_eq!(header.badge, "Last 10");
        assert_eq!(header.trend, Trend::Up);
        assert_eq!(header.trend.label(), "High Trend");
        assert_eq!(header.trend_color, ChartTheme::default().accent);
    }

    #[test]
    fn test_chart_trend_config_override() {
        let chart = BttsChart::new(records(&[10, 10, 11]))
            .unwrap()
            .trend_config(&TrendConfig { window: 1, band: 0.2 })
            .unwrap();
        assert_eq!(chart.trend(), Trend::Neutral);
        assert_eq!(chart.header().trend_color, ChartTheme::default().muted);
    }

    #[test]
    fn test_render_svg_structure() {
        let chart = BttsChart::new(records(&[6, 7, 5, 8])).unwrap();
        let svg = chart.render_svg(&HoverState::new());

        assert!(svg.contains("viewBox=\"0 0 100 40\""));
        assert!(svg.contains("preserveAspectRatio=\"none\""));
        assert!(svg.contains("<linearGradient id=\"chartFill\""));
        assert!(svg.contains("offset=\"50%\""));
        assert!(svg.contains("fill=\"url(#chartFill)\""));
        assert!(svg.contains("stroke-dasharray=\"2 2\""));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains(&chart.geometry().stroke_path));
        assert!(svg.contains(&chart.geometry().area_path));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_render_svg_with_hover() {
        let chart = BttsChart::new(records(&[6, 7, 5, 8])).unwrap();
        let mut hover = HoverState::new();
        chart.hover_at(&mut hover, 35.0);

        let svg = chart.render_svg(&hover);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("r=\"1.5\""));
        assert!(svg.contains("r=\"0.8\""));
        assert!(svg.contains("stroke-dasharray=\"1 1\""));
        assert!(svg.contains(">7</text>"));
    }

    #[test]
    fn test_tooltip_flips_near_right_edge() {
        let chart = BttsChart::new(records(&[6, 7, 5, 8])).unwrap();
        let mut hover = HoverState::new();
        chart.hover_at(&mut hover, 99.0);

        let svg = chart.render_svg(&hover);
        assert!(svg.contains("translate(75, 0)"));
    }

    #[test]
    fn test_empty_chart_placeholder() {
        let chart = BttsChart::new(Vec::new()).unwrap();
        let mut hover = HoverState::new();
        chart.hover_at(&mut hover, 50.0);

        let svg = chart.render_svg(&hover);
        assert!(svg.contains(NO_DATA_TEXT));
        assert!(!svg.contains("<path"));
        assert!(!hover.is_active());
        assert_eq!(chart.header().badge, "Last 0");
    }

    #[test]
    fn test_chart_rejects_invalid_config() {
        let config = DashboardConfig {
            chart: CurveConfig::new(0.0, 40.0),
            ..DashboardConfig::default()
        };
        let err = BttsChart::with_config(records(&[1]), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_chart_rejects_invalid_trend() {
        let config = DashboardConfig {
            trend: TrendConfig { window: 5, band: -0.5 },
            ..DashboardConfig::default()
        };
        let err = BttsChart::with_config(records(&[1, 1, 1]), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "trend.band", .. }));

        let chart = BttsChart::new(records(&[1, 1, 1])).unwrap();
        assert!(chart.trend_config(&TrendConfig { window: 0, band: 0.05 }).is_err());
    }

    #[test]
    fn test_falling_trend_badge_color() {
        let chart = BttsChart::new(records(&[5, 5, 5, 5, 5, 1, 1, 1, 1, 1])).unwrap();
        let header = chart.header();
        assert_eq!(header.trend, Trend::Down);
        assert_eq!(header.trend_color, ChartTheme::default().trend_down);
    }

    #[test]
    fn test_chart_set_dimensions() {
        let mut chart = BttsChart::new(records(&[1, 2])).unwrap();
        chart.set_dimensions(1200, 300);
        assert_eq!(chart.pixel_size(), (1200, 300));

        let svg = chart.render_svg(&HoverState::new());
        assert!(svg.contains("width=\"1200\""));
        assert!(svg.contains("viewBox=\"0 0 100 40\""));
    }

    #[test]
    fn test_chart_write_svg() {
        let chart = BttsChart::new(records(&[2, 4, 3])).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("btts.svg");

        chart.write_svg(&path, &HoverState::new()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
    }

    #[test]
    fn test_record_yaml_optional_date() {
        let record: BttsRecord =
            serde_yaml_ng::from_str("match_id: a1\nbtts_count: 3").unwrap();
        assert_eq!(record, BttsRecord::new("a1", 3));
    }
}

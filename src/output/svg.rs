//! SVG output encoder.
//!
//! Vector output in viewport units: the document's `viewBox` is the chart
//! viewport, and the rendered pixel size is set separately so the host can
//! stretch the chart over any container.

use crate::color::Rgba;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for vector output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// viewBox width
    width: f32,
    /// viewBox height
    height: f32,
    /// Rendered size in pixels (defaults to the viewBox size)
    size: Option<(u32, u32)>,
    /// Stretch to the rendered size instead of letterboxing
    stretch: bool,
    /// Keep stroke widths constant when stretched
    non_scaling_strokes: bool,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// Gradient definitions
    gradients: Vec<LinearGradient>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// Paint for filled shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Solid color.
    Color(Rgba),
    /// Reference to a gradient defined on the encoder.
    Gradient(String),
}

impl Fill {
    fn to_attr(&self) -> String {
        match self {
            Self::Color(color) => color.to_css(),
            Self::Gradient(id) => format!("url(#{id})"),
        }
    }
}

impl From<Rgba> for Fill {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

/// Stroke line cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// One stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Offset in `[0, 1]`.
    pub offset: f32,
    /// Stop color; its alpha becomes `stop-opacity`.
    pub color: Rgba,
}

/// A `<linearGradient>` definition in bounding-box units.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Element id referenced by [`Fill::Gradient`].
    pub id: String,
    /// Start and end of the gradient vector, `(x1, y1, x2, y2)`.
    pub vector: (f32, f32, f32, f32),
    /// Color stops in offset order.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// A top-to-bottom gradient.
    #[must_use]
    pub fn vertical(id: impl Into<String>, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.into(),
            vector: (0.0, 0.0, 0.0, 1.0),
            stops,
        }
    }
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: Fill,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Circle
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
    },
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
        dash: Option<(f32, f32)>,
    },
    /// Path (SVG path data)
    Path {
        d: String,
        fill: Option<Fill>,
        stroke: Option<Rgba>,
        stroke_width: f32,
        line_cap: LineCap,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        monospace: bool,
        bold: bool,
    },
    /// Translated group of child elements
    Group {
        translate: (f32, f32),
        children: Vec<SvgElement>,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(100.0, 40.0)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with the given viewBox dimensions.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            size: None,
            stretch: false,
            non_scaling_strokes: false,
            background: None,
            gradients: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Set the rendered pixel size.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Stretch the viewBox to the rendered size (`preserveAspectRatio="none"`).
    #[must_use]
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Keep stroke widths in screen pixels when stretched.
    #[must_use]
    pub fn non_scaling_strokes(mut self, enabled: bool) -> Self {
        self.non_scaling_strokes = enabled;
        self
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Define a linear gradient.
    #[must_use]
    pub fn gradient(mut self, gradient: LinearGradient) -> Self {
        self.gradients.push(gradient);
        self
    }

    /// Add a rectangle.
    #[must_use]
    pub fn rect(mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx: 0.0,
            fill: Fill::Color(fill),
            stroke: None,
            stroke_width: 1.0,
        });
        self
    }

    /// Add a circle.
    #[must_use]
    pub fn circle(mut self, cx: f32, cy: f32, r: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Circle { cx, cy, r, fill });
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dash: None,
        });
        self
    }

    /// Add an SVG path.
    #[must_use]
    pub fn path(
        mut self,
        d: &str,
        fill: Option<Fill>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Path {
            d: d.to_string(),
            fill,
            stroke,
            stroke_width,
            line_cap: LineCap::default(),
        });
        self
    }

    /// Add text.
    #[must_use]
    pub fn text(mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor: TextAnchor::Start,
            monospace: false,
            bold: false,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Number of top-level elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);
        let (px_width, px_height) = self
            .size
            .unwrap_or((self.width.ceil() as u32, self.height.ceil() as u32));
        let aspect = if self.stretch {
            r#" preserveAspectRatio="none""#
        } else {
            ""
        };

        // SVG header
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px_width}" height="{px_height}" viewBox="0 0 {} {}"{aspect}>"#,
            self.width, self.height
        );

        // Gradient definitions
        if !self.gradients.is_empty() {
            svg.push_str("  <defs>\n");
            for gradient in &self.gradients {
                let _ = writeln!(svg, "    {}", gradient_to_svg(gradient));
            }
            svg.push_str("  </defs>\n");
        }

        // Background
        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_css()
            );
        }

        // Elements
        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element, self.non_scaling_strokes));
        }

        // Close SVG
        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

fn gradient_to_svg(gradient: &LinearGradient) -> String {
    let (x1, y1, x2, y2) = gradient.vector;
    let stops: String = gradient
        .stops
        .iter()
        .map(|stop| {
            let opaque = stop.color.with_alpha(255);
            format!(
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{:.3}"/>"#,
                stop.offset * 100.0,
                opaque.to_css(),
                stop.color.opacity()
            )
        })
        .collect();
    format!(
        r#"<linearGradient id="{}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}">{stops}</linearGradient>"#,
        gradient.id
    )
}

/// Escape XML special characters.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement, non_scaling: bool) -> String {
    let effect = if non_scaling {
        r#" vector-effect="non-scaling-stroke""#
    } else {
        ""
    };

    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            stroke,
            stroke_width,
        } => {
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}"{effect}"#, s.to_css()))
                .unwrap_or_default();
            let rx_attr = if *rx > 0.0 {
                format!(r#" rx="{rx}""#)
            } else {
                String::new()
            };
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"{rx_attr} fill="{}"{stroke_attr}/>"#,
                fill.to_attr()
            )
        }
        SvgElement::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, fill.to_css())
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dash,
        } => {
            let dash_attr = dash
                .map(|(on, off)| format!(r#" stroke-dasharray="{on} {off}""#))
                .unwrap_or_default();
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"{dash_attr}{effect}/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Path {
            d,
            fill,
            stroke,
            stroke_width,
            line_cap,
        } => {
            let fill_attr = fill
                .as_ref()
                .map_or_else(|| "none".to_string(), Fill::to_attr);
            let stroke_attr = stroke
                .map(|s| {
                    let cap = match line_cap {
                        LineCap::Butt => String::new(),
                        cap => format!(r#" stroke-linecap="{}""#, cap.as_str()),
                    };
                    format!(
                        r#" stroke="{}" stroke-width="{stroke_width}"{cap}{effect}"#,
                        s.to_css()
                    )
                })
                .unwrap_or_default();
            format!(r#"<path d="{d}" fill="{fill_attr}"{stroke_attr}/>"#)
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
            monospace,
            bold,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let family = if *monospace { "monospace" } else { "sans-serif" };
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="{family}"{weight}>{}</text>"#,
                fill.to_css(),
                escape_text(text)
            )
        }
        SvgElement::Group {
            translate: (tx, ty),
            children,
        } => {
            let inner: String = children
                .iter()
                .map(|child| element_to_svg(child, non_scaling))
                .collect();
            format!(r#"<g transform="translate({tx}, {ty})">{inner}</g>"#)
        }
    }
}

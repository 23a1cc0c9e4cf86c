//! Output encoders (SVG).

mod svg;

pub use svg::{Fill, GradientStop, LineCap, LinearGradient, SvgElement, SvgEncoder, TextAnchor};

//! Pointer hover state for curve charts.
//!
//! The host forwards pointer events in its own pixel space; this module maps
//! them into viewport units, resolves the nearest sample and keeps a single
//! hovered-point slot. The state is owned by the caller and passed
//! explicitly, so the curve geometry itself stays immutable.

use crate::curve::{nearest_point, NormalizedPoint};
use crate::geometry::Rect;
use crate::scale::{LinearScale, Scale};

/// Tooltip box width in viewport units.
pub const TOOLTIP_WIDTH: f32 = 24.0;
/// Tooltip box height in viewport units.
pub const TOOLTIP_HEIGHT: f32 = 12.0;
/// Gap between the hovered point and a right-hand tooltip.
const TOOLTIP_GAP: f32 = 2.0;
/// Offset of a left-hand tooltip from the hovered point.
const TOOLTIP_FLIP_OFFSET: f32 = 25.0;
/// Distance from the right edge within which the tooltip flips left.
const TOOLTIP_FLIP_MARGIN: f32 = 20.0;

/// Map a host pointer x coordinate into viewport units.
///
/// `container_left` and `container_width` describe the host element the
/// chart is stretched over. Returns `None` when the container has no width.
#[must_use]
pub fn pointer_to_viewport(
    client_x: f32,
    container_left: f32,
    container_width: f32,
    viewport_width: f32,
) -> Option<f32> {
    let scale = LinearScale::new(
        (container_left, container_left + container_width),
        (0.0, viewport_width),
    )
    .ok()?;
    Some(scale.scale(client_x))
}

/// Where to draw the value tooltip for a hovered x.
///
/// The box sits just right of the point, and flips to the left when the
/// point is within 20 units of the right edge.
#[must_use]
pub fn tooltip_rect(hover_x: f32, viewport_width: f32) -> Rect {
    let x = if hover_x > viewport_width - TOOLTIP_FLIP_MARGIN {
        hover_x - TOOLTIP_FLIP_OFFSET
    } else {
        hover_x + TOOLTIP_GAP
    };
    Rect::new(x, 0.0, TOOLTIP_WIDTH, TOOLTIP_HEIGHT)
}

/// The single hovered-point slot of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    hovered: Option<NormalizedPoint>,
}

impl HoverState {
    /// Create an empty hover state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered point.
    #[must_use]
    pub fn hovered(&self) -> Option<&NormalizedPoint> {
        self.hovered.as_ref()
    }

    /// Whether a point is hovered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hovered.is_some()
    }

    /// Update from a pointer position already in viewport units.
    ///
    /// Leaves the state untouched when there are no points.
    pub fn on_pointer_move(&mut self, points: &[NormalizedPoint], viewport_x: f32) {
        if let Some(point) = nearest_point(points, viewport_x) {
            tracing::trace!(
                viewport_x,
                index = point.original_index,
                "hover moved"
            );
            self.hovered = Some(*point);
        }
    }

    /// Update from a host pointer event.
    pub fn on_client_move(
        &mut self,
        points: &[NormalizedPoint],
        client_x: f32,
        container_left: f32,
        container_width: f32,
        viewport_width: f32,
    ) {
        if let Some(x) =
            pointer_to_viewport(client_x, container_left, container_width, viewport_width)
        {
            self.on_pointer_move(points, x);
        }
    }

    /// The pointer left the chart.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = None;
    }
}

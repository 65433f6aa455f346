//! Decorative backdrop grid for the canvas.
//!
//! Lines are anchored to the top-left of the target rect so the pattern
//! stays put while the window is resized. Iteration bounds are computed
//! once up front; the painter is only handed positions inside the rect.

use egui::{Painter, Rect, Stroke};

/// Offsets of grid lines along one axis: `start, start + spacing, ...`
/// strictly below `end`. Yields nothing for a non-positive spacing.
pub fn line_offsets(start: f32, end: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let count = if spacing > 0.0 && end > start {
        ((end - start) / spacing).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| start + i as f32 * spacing)
}

/// Draw a square grid of 1px lines over `rect`.
pub fn draw_grid(painter: &Painter, rect: Rect, spacing: f32, stroke: Stroke) {
    for x in line_offsets(rect.min.x, rect.max.x, spacing) {
        painter.vline(x, rect.y_range(), stroke);
    }
    for y in line_offsets(rect.min.y, rect.max.y, spacing) {
        painter.hline(rect.x_range(), y, stroke);
    }
}

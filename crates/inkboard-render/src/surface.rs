//! Drawing surface abstraction.

use inkboard_core::shapes::Font;
use kurbo::{BezPath, Point, Stroke};
use peniko::Color;

/// Minimal 2D drawing target.
///
/// Implementations can record commands, emit SVG, or drive a real canvas.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color);

    /// Draw `text` with its first baseline starting at `position`.
    fn fill_text(&mut self, text: &str, position: Point, font: &Font);
}

//! Drag-to-size interpreter for box shapes.

use super::Interaction;
use crate::geometry::normalize_box;
use crate::shapes::ShapePatch;
use kurbo::Point;

/// Default edge length of a box inserted by double-click.
pub const DEFAULT_BOX_SIZE: f64 = 100.0;

/// Tracks one anchor from mouse-down and sizes a box against it.
#[derive(Debug, Clone)]
pub struct PointDragInteraction {
    anchor: Option<Point>,
    default_size: f64,
}

impl Default for PointDragInteraction {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_SIZE)
    }
}

impl PointDragInteraction {
    pub fn new(default_size: f64) -> Self {
        Self {
            anchor: None,
            default_size,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    fn box_patch(anchor: Point, point: Point) -> ShapePatch {
        let (top_left, bottom_right) = normalize_box(anchor, point);
        ShapePatch::sized_box(
            top_left,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }
}

impl Interaction for PointDragInteraction {
    fn handle_mouse_down(&mut self, point: Point) -> Option<ShapePatch> {
        if self.anchor.is_none() {
            log::debug!("Box anchor at ({}, {})", point.x, point.y);
            self.anchor = Some(point);
        }
        None
    }

    fn handle_mouse_move(&mut self, point: Point) -> Option<ShapePatch> {
        let anchor = self.anchor?;
        Some(Self::box_patch(anchor, point).preview())
    }

    fn handle_mouse_up(&mut self, point: Point) -> Option<ShapePatch> {
        let anchor = self.anchor.take()?;
        if anchor == point {
            log::debug!("Zero-size box rejected");
            return None;
        }
        Some(Self::box_patch(anchor, point).finalized())
    }

    fn handle_double_click(&mut self, point: Point) -> Option<ShapePatch> {
        self.anchor = None;
        Some(ShapePatch::sized_box(point, self.default_size, self.default_size).finalized())
    }

    fn reset(&mut self) {
        self.anchor = None;
    }

    fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::StrokeStyle;

    #[test]
    fn test_move_without_anchor_is_ignored() {
        let mut drag = PointDragInteraction::default();
        assert!(drag.handle_mouse_move(Point::new(10.0, 10.0)).is_none());
        assert!(drag.handle_mouse_up(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_drag_preview_then_finalize() {
        let mut drag = PointDragInteraction::default();
        assert!(drag.handle_mouse_down(Point::new(10.0, 20.0)).is_none());

        let preview = drag.handle_mouse_move(Point::new(50.0, 80.0)).unwrap();
        assert_eq!(preview.stroke_style, Some(StrokeStyle::Dashed));
        assert_eq!(preview.temp, Some(true));
        assert_eq!(preview.origin, Some(Point::new(10.0, 20.0)));

        let done = drag.handle_mouse_up(Point::new(110.0, 70.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(done.stroke_style, Some(StrokeStyle::Solid));
        assert_eq!(done.origin, Some(Point::new(10.0, 20.0)));
        assert_eq!(done.width, Some(100.0));
        assert_eq!(done.height, Some(50.0));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_drag_up_and_left_normalizes() {
        let mut drag = PointDragInteraction::default();
        drag.handle_mouse_down(Point::new(110.0, 70.0));
        let done = drag.handle_mouse_up(Point::new(10.0, 20.0)).unwrap();
        assert_eq!(done.origin, Some(Point::new(10.0, 20.0)));
        assert_eq!(done.width, Some(100.0));
        assert_eq!(done.height, Some(50.0));
    }

    #[test]
    fn test_zero_delta_release_rejected() {
        let mut drag = PointDragInteraction::default();
        drag.handle_mouse_down(Point::new(30.0, 30.0));
        assert!(drag.handle_mouse_up(Point::new(30.0, 30.0)).is_none());
        // Anchor is gone, so the next gesture starts fresh.
        assert!(drag.anchor().is_none());
    }

    #[test]
    fn test_second_down_keeps_anchor() {
        let mut drag = PointDragInteraction::default();
        drag.handle_mouse_down(Point::new(0.0, 0.0));
        drag.handle_mouse_down(Point::new(40.0, 40.0));
        assert_eq!(drag.anchor(), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_double_click_inserts_default_box() {
        let mut drag = PointDragInteraction::new(64.0);
        let done = drag.handle_double_click(Point::new(5.0, 6.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(done.origin, Some(Point::new(5.0, 6.0)));
        assert_eq!(done.width, Some(64.0));
        assert_eq!(done.height, Some(64.0));
    }
}

//! Click-to-anchor interpreter for polylines and arrows.
//!
//! Each mouse-down after the first is recorded but only mouse-up decides what
//! happens to it:
//!
//! * a drag from the very first press draws a two-point line at once;
//! * after the pointer has been pressed elsewhere, a release away from the
//!   start appends a vertex and keeps the path open;
//! * a release near the start closes the path on its first vertex.
//!
//! In line-only mode (arrows) the path finalizes as soon as it has two
//! vertices and never closes on itself.

use super::Interaction;
use crate::geometry::is_near;
use crate::shapes::ShapePatch;
use kurbo::Point;

#[derive(Debug, Clone, Default)]
pub struct MultiPointInteraction {
    vertices: Vec<Point>,
    first_down: Option<Point>,
    previous_down: Option<Point>,
    last_down: Option<Point>,
    line_only: bool,
}

impl MultiPointInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreter that stops at two vertices.
    pub fn line_only() -> Self {
        Self {
            line_only: true,
            ..Self::default()
        }
    }

    /// Vertices committed by the current gesture.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// True when the two most recent presses landed on different points.
    fn has_moved(&self) -> bool {
        matches!((self.previous_down, self.last_down), (Some(prev), Some(last)) if prev != last)
    }

    fn is_dragging(&self, anchor: Point, release: Point) -> bool {
        self.vertices.len() == 1 && !self.has_moved() && !is_near(release, anchor)
    }

    fn finish(&mut self, point: Point) -> ShapePatch {
        self.vertices.push(point);
        log::debug!("Path finalized with {} vertices", self.vertices.len());
        ShapePatch::vertex(point).finalized().clear_cursor()
    }
}

impl Interaction for MultiPointInteraction {
    fn handle_mouse_down(&mut self, point: Point) -> Option<ShapePatch> {
        self.previous_down = self.last_down.replace(point);
        if self.first_down.is_some() {
            return None;
        }
        log::debug!("Path anchored at ({}, {})", point.x, point.y);
        self.first_down = Some(point);
        self.vertices.push(point);
        Some(ShapePatch::vertex(point).preview())
    }

    fn handle_mouse_move(&mut self, point: Point) -> Option<ShapePatch> {
        self.first_down?;
        Some(ShapePatch::cursor(point))
    }

    /// Decide what a release does to the open path.
    ///
    /// A release near the anchor closes the path only when there is a segment
    /// to close: with a single vertex, or in line-only mode, it is ignored.
    fn handle_mouse_up(&mut self, point: Point) -> Option<ShapePatch> {
        let anchor = self.first_down?;

        if self.is_dragging(anchor, point) {
            return Some(self.finish(point));
        }
        if self.vertices.last() == Some(&point) {
            return None;
        }
        if !self.has_moved() {
            return None;
        }

        if is_near(point, anchor) {
            if self.line_only || self.vertices.len() < 2 {
                return None;
            }
            return Some(self.finish(anchor));
        }

        if self.line_only {
            // The anchor plus this release make the arrow's two vertices.
            return Some(self.finish(point));
        }
        self.vertices.push(point);
        log::trace!("Path vertex {} at ({}, {})", self.vertices.len(), point.x, point.y);
        Some(ShapePatch::vertex(point).preview())
    }

    fn handle_double_click(&mut self, point: Point) -> Option<ShapePatch> {
        if self.vertices.len() < 2 {
            return None;
        }
        if self.vertices.last() == Some(&point) {
            log::debug!("Path finalized with {} vertices", self.vertices.len());
            return Some(ShapePatch::default().finalized().clear_cursor());
        }
        Some(self.finish(point))
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.first_down = None;
        self.previous_down = None;
        self.last_down = None;
    }

    fn is_active(&self) -> bool {
        self.first_down.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CursorUpdate, StrokeStyle};

    fn click(path: &mut MultiPointInteraction, point: Point) -> Option<ShapePatch> {
        path.handle_mouse_down(point);
        path.handle_mouse_up(point)
    }

    #[test]
    fn test_first_down_anchors_dashed_vertex() {
        let mut path = MultiPointInteraction::new();
        let patch = path.handle_mouse_down(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(patch.vertices, vec![Point::new(1.0, 2.0)]);
        assert_eq!(patch.stroke_style, Some(StrokeStyle::Dashed));
        assert!(path.is_active());

        // Later presses never emit on their own.
        assert!(path.handle_mouse_down(Point::new(40.0, 2.0)).is_none());
    }

    #[test]
    fn test_move_before_anchor_is_ignored() {
        let mut path = MultiPointInteraction::new();
        assert!(path.handle_mouse_move(Point::new(5.0, 5.0)).is_none());
        let _ = path.handle_mouse_down(Point::new(0.0, 0.0));
        let patch = path.handle_mouse_move(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(patch.cursor, CursorUpdate::Set(Point::new(5.0, 5.0)));
        assert!(patch.vertices.is_empty());
    }

    #[test]
    fn test_click_on_anchor_does_nothing() {
        let mut path = MultiPointInteraction::new();
        assert!(click(&mut path, Point::new(0.0, 0.0)).is_none());
        assert_eq!(path.vertices().len(), 1);
    }

    #[test]
    fn test_drag_shortcut_draws_two_point_line() {
        let mut path = MultiPointInteraction::new();
        path.handle_mouse_down(Point::new(0.0, 0.0));
        path.handle_mouse_move(Point::new(30.0, 0.0));
        let done = path.handle_mouse_up(Point::new(60.0, 0.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(done.cursor, CursorUpdate::Clear);
        assert_eq!(path.vertices(), &[Point::new(0.0, 0.0), Point::new(60.0, 0.0)]);
    }

    #[test]
    fn test_short_drag_is_a_click() {
        let mut path = MultiPointInteraction::new();
        path.handle_mouse_down(Point::new(0.0, 0.0));
        assert!(path.handle_mouse_up(Point::new(9.99, 0.0)).is_none());
        assert_eq!(path.vertices().len(), 1);
    }

    #[test]
    fn test_clicks_then_double_click() {
        let mut path = MultiPointInteraction::new();
        click(&mut path, Point::new(0.0, 0.0));

        let patch = click(&mut path, Point::new(50.0, 0.0)).unwrap();
        assert!(!patch.is_final());
        assert_eq!(patch.temp, Some(true));
        let patch = click(&mut path, Point::new(100.0, 0.0)).unwrap();
        assert!(!patch.is_final());

        let done = path.handle_double_click(Point::new(150.0, 0.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(done.stroke_style, Some(StrokeStyle::Solid));
        assert_eq!(
            path.vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(150.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_repeated_clicks_before_double_click_do_not_duplicate() {
        let mut path = MultiPointInteraction::new();
        click(&mut path, Point::new(0.0, 0.0));
        click(&mut path, Point::new(50.0, 0.0));
        // A native double-click arrives after two full clicks.
        click(&mut path, Point::new(100.0, 0.0));
        assert!(click(&mut path, Point::new(100.0, 0.0)).is_none());
        let done = path.handle_double_click(Point::new(100.0, 0.0)).unwrap();
        assert!(done.vertices.is_empty());
        assert!(done.is_final());
        assert_eq!(path.vertices().len(), 3);
    }

    #[test]
    fn test_release_near_start_closes_path() {
        let mut path = MultiPointInteraction::new();
        click(&mut path, Point::new(0.0, 0.0));
        click(&mut path, Point::new(50.0, 0.0));
        click(&mut path, Point::new(50.0, 50.0));
        let done = click(&mut path, Point::new(3.0, 4.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(done.vertices, vec![Point::new(0.0, 0.0)]);
        assert_eq!(path.vertices().first(), path.vertices().last());
    }

    #[test]
    fn test_click_exactly_on_start_closes_path() {
        let mut path = MultiPointInteraction::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(50.0, 0.0);
        let c = Point::new(50.0, 50.0);
        click(&mut path, a);
        click(&mut path, b);
        click(&mut path, c);
        let done = click(&mut path, a).unwrap();
        assert!(done.is_final());
        assert_eq!(done.cursor, CursorUpdate::Clear);
        assert_eq!(path.vertices(), &[a, b, c, a]);
    }

    #[test]
    fn test_press_on_last_vertex_then_drag_away_is_ignored() {
        let mut path = MultiPointInteraction::new();
        click(&mut path, Point::new(0.0, 0.0));
        click(&mut path, Point::new(50.0, 0.0));
        path.handle_mouse_down(Point::new(50.0, 0.0));
        assert!(path.handle_mouse_up(Point::new(90.0, 30.0)).is_none());
        assert_eq!(path.vertices().len(), 2);
    }

    #[test]
    fn test_double_click_with_single_vertex_is_noop() {
        let mut path = MultiPointInteraction::new();
        path.handle_mouse_down(Point::new(0.0, 0.0));
        assert!(path.handle_double_click(Point::new(0.0, 0.0)).is_none());
        let mut fresh = MultiPointInteraction::line_only();
        assert!(fresh.handle_double_click(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_line_only_finalizes_at_two_vertices() {
        let mut arrow = MultiPointInteraction::line_only();
        click(&mut arrow, Point::new(0.0, 0.0));
        let done = click(&mut arrow, Point::new(80.0, 40.0)).unwrap();
        assert!(done.is_final());
        assert_eq!(arrow.vertices().len(), 2);
    }

    #[test]
    fn test_line_only_never_closes() {
        let mut arrow = MultiPointInteraction::line_only();
        click(&mut arrow, Point::new(0.0, 0.0));
        assert!(click(&mut arrow, Point::new(4.0, 4.0)).is_none());
        assert_eq!(arrow.vertices().len(), 1);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut path = MultiPointInteraction::new();
        click(&mut path, Point::new(0.0, 0.0));
        click(&mut path, Point::new(50.0, 0.0));
        path.reset();
        assert!(!path.is_active());
        assert!(path.vertices().is_empty());
        assert!(path.handle_mouse_up(Point::new(10.0, 10.0)).is_none());
    }
}

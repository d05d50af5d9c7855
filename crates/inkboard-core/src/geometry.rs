//! Geometry helpers shared by interpreters, tools and renderers.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Distance (in canvas pixels) below which two points count as "near".
///
/// Governs both click-vs-drag recognition and closing a path on its start point.
pub const PROXIMITY_THRESHOLD: f64 = 10.0;

/// Length of an arrowhead measured along the shaft.
pub const ARROW_HEAD_LENGTH: f64 = 20.0;

/// Angle between the shaft and each barb.
pub const BARB_ANGLE: f64 = PI / 8.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Check if two points are closer than [`PROXIMITY_THRESHOLD`].
///
/// The comparison is strict: points exactly 10px apart are not near.
pub fn is_near(a: Point, b: Point) -> bool {
    distance(a, b) < PROXIMITY_THRESHOLD
}

/// Sort two arbitrary corners into `(top_left, bottom_right)`.
pub fn normalize_box(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Convert a device (client) position into canvas space.
pub fn to_canvas_point(client: Point, canvas_origin: Point) -> Point {
    Point::new(client.x - canvas_origin.x, client.y - canvas_origin.y)
}

/// Axis-aligned box derived from shape geometry.
///
/// Only used for hit-testing and selection rendering, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Top-left corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Box spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (top_left, bottom_right) = normalize_box(a, b);
        Self::new(
            top_left,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    /// Smallest box containing every vertex, `None` for an empty slice.
    pub fn from_vertices(vertices: &[Point]) -> Option<Self> {
        let first = vertices.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for vertex in &vertices[1..] {
            min_x = min_x.min(vertex.x);
            min_y = min_y.min(vertex.y);
            max_x = max_x.max(vertex.x);
            max_y = max_y.max(vertex.y);
        }
        Some(Self::new(
            Point::new(min_x, min_y),
            max_x - min_x,
            max_y - min_y,
        ))
    }

    /// Strict interior test; points on the border are outside.
    pub fn contains(&self, point: Point) -> bool {
        let x_hit = point.x > self.origin.x && point.x < self.origin.x + self.width;
        let y_hit = point.y > self.origin.y && point.y < self.origin.y + self.height;
        x_hit && y_hit
    }

    /// Grow the box by `padding` on every side.
    pub fn padded(&self, padding: f64) -> Self {
        Self::new(
            Point::new(self.origin.x - padding, self.origin.y - padding),
            self.width + padding * 2.0,
            self.height + padding * 2.0,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }
}

/// The two barb endpoints of an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowBarbs {
    pub left: Point,
    pub right: Point,
}

/// Compute arrowhead barbs for a segment ending at `end`.
///
/// Barbs sit at ±[`BARB_ANGLE`] from the reversed line direction, sized so
/// their projection on the shaft is [`ARROW_HEAD_LENGTH`].
pub fn arrow_barbs(begin: Point, end: Point) -> ArrowBarbs {
    let line_angle = (end.y - begin.y).atan2(end.x - begin.x);
    let barb_length = (ARROW_HEAD_LENGTH / BARB_ANGLE.cos()).abs();

    let left_angle = line_angle + PI + BARB_ANGLE;
    let right_angle = line_angle + PI - BARB_ANGLE;

    ArrowBarbs {
        left: Point::new(
            end.x + left_angle.cos() * barb_length,
            end.y + left_angle.sin() * barb_length,
        ),
        right: Point::new(
            end.x + right_angle.cos() * barb_length,
            end.y + right_angle.sin() * barb_length,
        ),
    }
}

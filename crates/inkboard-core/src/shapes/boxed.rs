//! Box geometry shared by rectangles and ellipses.

use crate::geometry::BoundingBox;
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A box described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Top-left corner.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.origin, self.width, self.height)
    }

    pub fn as_rect(&self) -> Rect {
        self.bounding_box().to_rect()
    }

    pub fn center(&self) -> Point {
        self.bounding_box().center()
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Strict axis-aligned box test.
    pub fn contains(&self, point: Point) -> bool {
        self.bounding_box().contains(point)
    }

    /// Normalized point-in-ellipse test: `(dx/rx)² + (dy/ry)² <= 1`.
    ///
    /// A box with a zero radius is never hit.
    pub fn ellipse_contains(&self, point: Point) -> bool {
        let (radius_x, radius_y) = self.radii();
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return false;
        }
        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        (dx * dx) / (radius_x * radius_x) + (dy * dy) / (radius_y * radius_y) <= 1.0
    }

    /// Outline path of the box as a rectangle.
    pub fn rect_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    /// Outline path of the ellipse inscribed in the box.
    pub fn ellipse_path(&self) -> BezPath {
        KurboEllipse::new(self.center(), self.radii(), 0.0).to_path(0.1)
    }
}

//! Vertex path geometry shared by polylines and arrows.

use crate::geometry::{ArrowBarbs, BoundingBox, arrow_barbs};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// An ordered vertex list with an optional live cursor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    /// Committed vertices in drawing order.
    pub vertices: Vec<Point>,
    /// Live pointer position while drawing; rendered as a rubber-band
    /// segment from the last vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_position: Option<Point>,
}

impl PathGeometry {
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            cursor_position: None,
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Bounding-box hit test over all vertices.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounding_box().is_some_and(|bbox| bbox.contains(point))
    }

    /// Segment the arrowhead is drawn on: last vertex to the cursor while
    /// drawing, otherwise the last two vertices.
    pub fn head_segment(&self) -> Option<(Point, Point)> {
        let last = *self.vertices.last()?;
        match self.cursor_position {
            Some(cursor) => Some((last, cursor)),
            None if self.vertices.len() >= 2 => {
                Some((self.vertices[self.vertices.len() - 2], last))
            }
            None => None,
        }
    }

    pub fn arrow_barbs(&self) -> Option<ArrowBarbs> {
        self.head_segment().map(|(begin, end)| arrow_barbs(begin, end))
    }

    /// Shaft path through every vertex, extended to the cursor if present.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.vertices.first() else {
            return path;
        };
        path.move_to(*first);
        for vertex in &self.vertices[1..] {
            path.line_to(*vertex);
        }
        if let Some(cursor) = self.cursor_position {
            path.line_to(cursor);
        }
        path
    }

    /// Shaft plus two barb strokes.
    pub fn to_arrow_path(&self) -> BezPath {
        let mut path = self.to_path();
        if let Some((_, end)) = self.head_segment() {
            if let Some(barbs) = self.arrow_barbs() {
                path.move_to(end);
                path.line_to(barbs.left);
                path.move_to(end);
                path.line_to(barbs.right);
            }
        }
        path
    }
}

//! Shape data for the whiteboard.
//!
//! Shapes are plain serializable data. A [`ShapeProperties`] record carries the
//! style shared by every kind plus a [`Geometry`] variant keyed by [`ShapeKind`].
//! Tools accumulate [`ShapePatch`] updates into a record while a gesture runs.

mod boxed;
mod path;
mod text;

pub use boxed::BoxGeometry;
pub use path::PathGeometry;
pub use text::{ApproximateTextMeasure, Font, FontFamily, FontStyle, TextGeometry, TextMeasure};

use crate::geometry::BoundingBox;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier assigned to a shape when it is committed.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// CSS-style `#rrggbb` hex string (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke style for shape outlines.
///
/// Previews are drawn dashed, committed shapes solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

/// Discriminant of the shape-kind union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Polyline,
    Arrow,
    Text,
}

impl ShapeKind {
    /// Every kind, in toolbar order.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Rectangle,
            ShapeKind::Ellipse,
            ShapeKind::Polyline,
            ShapeKind::Arrow,
            ShapeKind::Text,
        ]
    }

    /// Display name for logs and UI.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Text => "text",
        }
    }
}

/// Kind-specific geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Rectangle(BoxGeometry),
    Ellipse(BoxGeometry),
    Polyline(PathGeometry),
    Arrow(PathGeometry),
    Text(TextGeometry),
}

impl Geometry {
    /// Empty geometry for a new gesture of the given kind.
    pub fn empty(kind: ShapeKind, font: &Font) -> Self {
        match kind {
            ShapeKind::Rectangle => Geometry::Rectangle(BoxGeometry::default()),
            ShapeKind::Ellipse => Geometry::Ellipse(BoxGeometry::default()),
            ShapeKind::Polyline => Geometry::Polyline(PathGeometry::default()),
            ShapeKind::Arrow => Geometry::Arrow(PathGeometry::default()),
            ShapeKind::Text => Geometry::Text(TextGeometry::new(Point::ZERO, font.clone())),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Polyline(_) => ShapeKind::Polyline,
            Geometry::Arrow(_) => ShapeKind::Arrow,
            Geometry::Text(_) => ShapeKind::Text,
        }
    }
}

/// Serializable description of a drawn object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProperties {
    /// Assigned by the document on commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShapeId>,
    pub color: SerializableColor,
    pub stroke_style: StrokeStyle,
    #[serde(default)]
    pub selected: bool,
    /// True while the shape is a preview that has not been committed.
    #[serde(skip)]
    pub temp: bool,
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl ShapeProperties {
    /// Fresh properties for a gesture of the given kind.
    pub fn new(kind: ShapeKind, color: SerializableColor, font: &Font) -> Self {
        Self {
            id: None,
            color,
            stroke_style: StrokeStyle::default(),
            selected: false,
            temp: true,
            geometry: Geometry::empty(kind, font),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Merge a partial update. Path vertices are appended, never replaced.
    pub fn apply(&mut self, patch: ShapePatch) {
        if let Some(stroke_style) = patch.stroke_style {
            self.stroke_style = stroke_style;
        }
        if let Some(temp) = patch.temp {
            self.temp = temp;
        }
        match &mut self.geometry {
            Geometry::Rectangle(b) | Geometry::Ellipse(b) => {
                if let Some(origin) = patch.origin {
                    b.origin = origin;
                }
                if let Some(width) = patch.width {
                    b.width = width;
                }
                if let Some(height) = patch.height {
                    b.height = height;
                }
            }
            Geometry::Polyline(p) | Geometry::Arrow(p) => {
                p.vertices.extend(patch.vertices);
                match patch.cursor {
                    CursorUpdate::Keep => {}
                    CursorUpdate::Set(point) => p.cursor_position = Some(point),
                    CursorUpdate::Clear => p.cursor_position = None,
                }
            }
            Geometry::Text(t) => {
                if let Some(origin) = patch.origin {
                    t.origin = origin;
                }
                if let Some(width) = patch.width {
                    t.width = width;
                }
                if let Some(height) = patch.height {
                    t.height = height;
                }
            }
        }
    }

    /// Bounding box of the geometry, `None` for a path without vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match &self.geometry {
            Geometry::Rectangle(b) | Geometry::Ellipse(b) => Some(b.bounding_box()),
            Geometry::Polyline(p) | Geometry::Arrow(p) => p.bounding_box(),
            Geometry::Text(t) => Some(t.bounding_box()),
        }
    }

    /// Check if a point (canvas coordinates) hits this shape.
    pub fn hit_test(&self, point: Point) -> bool {
        match &self.geometry {
            Geometry::Rectangle(b) => b.contains(point),
            Geometry::Ellipse(b) => b.ellipse_contains(point),
            Geometry::Polyline(p) | Geometry::Arrow(p) => p.hit_test(point),
            Geometry::Text(t) => t.bounding_box().contains(point),
        }
    }

    pub fn as_path(&self) -> Option<&PathGeometry> {
        match &self.geometry {
            Geometry::Polyline(p) | Geometry::Arrow(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&BoxGeometry> {
        match &self.geometry {
            Geometry::Rectangle(b) | Geometry::Ellipse(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextGeometry> {
        match &self.geometry {
            Geometry::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// How a patch changes the rubber-band cursor of a path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorUpdate {
    #[default]
    Keep,
    Set(Point),
    Clear,
}

/// Partial property update emitted by gesture interpreters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapePatch {
    pub origin: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Vertices to append to a path.
    pub vertices: Vec<Point>,
    pub cursor: CursorUpdate,
    pub stroke_style: Option<StrokeStyle>,
    pub temp: Option<bool>,
}

impl ShapePatch {
    /// Box update spanning `origin` with the given size.
    pub fn sized_box(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin: Some(origin),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Path update appending a single vertex.
    pub fn vertex(point: Point) -> Self {
        Self {
            vertices: vec![point],
            ..Self::default()
        }
    }

    /// Path update moving the rubber-band cursor.
    pub fn cursor(point: Point) -> Self {
        Self {
            cursor: CursorUpdate::Set(point),
            ..Self::default()
        }
    }

    /// Mark as an in-progress preview (dashed, temp).
    pub fn preview(mut self) -> Self {
        self.stroke_style = Some(StrokeStyle::Dashed);
        self.temp = Some(true);
        self
    }

    /// Mark as a commit (solid, not temp).
    pub fn finalized(mut self) -> Self {
        self.stroke_style = Some(StrokeStyle::Solid);
        self.temp = Some(false);
        self
    }

    /// Drop the rubber-band cursor.
    pub fn clear_cursor(mut self) -> Self {
        self.cursor = CursorUpdate::Clear;
        self
    }

    /// Whether applying this patch completes the gesture.
    pub fn is_final(&self) -> bool {
        self.temp == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(kind: ShapeKind) -> ShapeProperties {
        ShapeProperties::new(kind, SerializableColor::black(), &Font::default())
    }

    #[test]
    fn test_new_properties_are_temp() {
        let shape = props(ShapeKind::Rectangle);
        assert!(shape.temp);
        assert!(!shape.selected);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
    }

    #[test]
    fn test_apply_box_patch() {
        let mut shape = props(ShapeKind::Ellipse);
        shape.apply(ShapePatch::sized_box(Point::new(10.0, 20.0), 30.0, 40.0).preview());
        assert_eq!(shape.stroke_style, StrokeStyle::Dashed);

        let b = shape.as_box().unwrap();
        assert_eq!(b.origin, Point::new(10.0, 20.0));
        assert!((b.width - 30.0).abs() < f64::EPSILON);
        assert!((b.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_appends_vertices() {
        let mut shape = props(ShapeKind::Polyline);
        shape.apply(ShapePatch::vertex(Point::new(0.0, 0.0)));
        shape.apply(ShapePatch::cursor(Point::new(5.0, 5.0)));
        shape.apply(ShapePatch::vertex(Point::new(50.0, 0.0)).finalized().clear_cursor());

        let path = shape.as_path().unwrap();
        assert_eq!(path.vertices, vec![Point::new(0.0, 0.0), Point::new(50.0, 0.0)]);
        assert!(path.cursor_position.is_none());
        assert!(!shape.temp);
        assert_eq!(shape.stroke_style, StrokeStyle::Solid);
    }

    #[test]
    fn test_cursor_keep() {
        let mut shape = props(ShapeKind::Arrow);
        shape.apply(ShapePatch::cursor(Point::new(5.0, 5.0)));
        shape.apply(ShapePatch::vertex(Point::new(1.0, 1.0)));
        assert_eq!(shape.as_path().unwrap().cursor_position, Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_empty_path_has_no_bounds() {
        let shape = props(ShapeKind::Polyline);
        assert!(shape.bounding_box().is_none());
        assert!(!shape.hit_test(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_uninitialized_box_never_hit() {
        assert!(!props(ShapeKind::Rectangle).hit_test(Point::new(0.0, 0.0)));
        assert!(!props(ShapeKind::Ellipse).hit_test(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_serialization_tags_kind() {
        let mut shape = props(ShapeKind::Rectangle);
        shape.apply(ShapePatch::sized_box(Point::new(1.0, 2.0), 3.0, 4.0).finalized());
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["kind"], "rectangle");
        assert_eq!(json["stroke_style"], "solid");
        assert!(json.get("temp").is_none());

        let back: ShapeProperties = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), ShapeKind::Rectangle);
        assert_eq!(back.as_box(), shape.as_box());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(SerializableColor::new(255, 128, 0, 255).to_hex(), "#ff8000");
    }
}

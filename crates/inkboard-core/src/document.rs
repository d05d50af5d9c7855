//! The append-only shape document.

use crate::shapes::{ShapeId, ShapeProperties};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Committed shapes in insertion order.
///
/// Insertion order is z-order and draw order: the last shape is the topmost.
/// Committed geometry is never edited; only the `selected` flag changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    shapes: Vec<ShapeProperties>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            shapes: Vec::new(),
        }
    }

    /// Append a committed shape, assigning its id.
    pub fn add_shape(&mut self, mut shape: ShapeProperties) -> ShapeId {
        let id = *shape.id.get_or_insert_with(Uuid::new_v4);
        shape.temp = false;
        log::info!("Committed {} {}", shape.kind().name(), id);
        self.shapes.push(shape);
        id
    }

    /// Shapes back to front.
    pub fn shapes(&self) -> &[ShapeProperties] {
        &self.shapes
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&ShapeProperties> {
        self.shapes.iter().find(|s| s.id == Some(id))
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Find shapes at a point (canvas coordinates), front to back.
    pub fn shapes_at_point(&self, point: Point) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point))
            .filter_map(|s| s.id)
            .collect()
    }

    /// Make `id` the only selected shape; `None` deselects everything.
    pub fn select_only(&mut self, id: Option<ShapeId>) {
        for shape in &mut self.shapes {
            shape.selected = id.is_some() && shape.id == id;
        }
    }

    /// Select the topmost shape under `point`, deselecting all others.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let hit = self.shapes_at_point(point).first().copied();
        self.select_only(hit);
        hit
    }

    pub fn selected(&self) -> impl Iterator<Item = &ShapeProperties> {
        self.shapes.iter().filter(|s| s.selected)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let mut document: Self = serde_json::from_str(json)?;
        for shape in &mut document.shapes {
            shape.id.get_or_insert_with(Uuid::new_v4);
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Font, SerializableColor, ShapeKind, ShapePatch};

    fn rect(x: f64, y: f64, size: f64) -> ShapeProperties {
        let mut shape = ShapeProperties::new(
            ShapeKind::Rectangle,
            SerializableColor::black(),
            &Font::default(),
        );
        shape.apply(ShapePatch::sized_box(Point::new(x, y), size, size).finalized());
        shape
    }

    #[test]
    fn test_add_shape_assigns_id() {
        let mut doc = Document::new();
        let id = doc.add_shape(rect(0.0, 0.0, 10.0));
        let stored = doc.get_shape(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert!(!stored.temp);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_z_order() {
        let mut doc = Document::new();
        let id1 = doc.add_shape(rect(0.0, 0.0, 100.0));
        let id2 = doc.add_shape(rect(50.0, 50.0, 100.0));

        // Point in both shapes
        let hits = doc.shapes_at_point(Point::new(75.0, 75.0));
        assert_eq!(hits, vec![id2, id1]);

        // Point only in the first
        assert_eq!(doc.shapes_at_point(Point::new(25.0, 25.0)), vec![id1]);
    }

    #[test]
    fn test_select_at_is_single_selection() {
        let mut doc = Document::new();
        let id1 = doc.add_shape(rect(0.0, 0.0, 100.0));
        let id2 = doc.add_shape(rect(50.0, 50.0, 100.0));

        assert_eq!(doc.select_at(Point::new(25.0, 25.0)), Some(id1));
        assert_eq!(doc.select_at(Point::new(75.0, 75.0)), Some(id2));
        let selected: Vec<_> = doc.selected().filter_map(|s| s.id).collect();
        assert_eq!(selected, vec![id2]);

        // Empty canvas deselects all
        assert_eq!(doc.select_at(Point::new(500.0, 500.0)), None);
        assert_eq!(doc.selected().count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut doc = Document::new();
        doc.add_shape(rect(0.0, 0.0, 10.0));
        doc.clear();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::new();
        let id = doc.add_shape(rect(10.0, 20.0, 30.0));
        doc.select_only(Some(id));

        let json = doc.to_json().unwrap();
        let loaded = Document::from_json(&json).unwrap();
        assert_eq!(loaded.id, doc.id);
        assert_eq!(loaded.shapes(), doc.shapes());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Document::from_json("{not json"),
            Err(DocumentError::Serialization(_))
        ));
    }
}

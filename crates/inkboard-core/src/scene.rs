//! The host side of the drawing session.

use crate::document::Document;
use crate::shapes::{ShapeId, ShapeProperties};
use crate::tools::ToolKind;
use kurbo::{Point, Rect};

/// Callbacks a tool uses to talk to whatever hosts it.
pub trait SceneHost {
    /// Commit a finished shape. Called exactly once per shape.
    fn finalize_shape(&mut self, shape: ShapeProperties);

    /// Show an in-progress preview, replacing any previous one.
    fn temp_shape(&mut self, shape: &ShapeProperties);

    /// Drop the current preview.
    fn clear_temp_shape(&mut self);

    /// The gesture is complete; install `next` or the default tool.
    fn tool_reset(&mut self, next: Option<ToolKind>);

    /// Select the topmost shape under `point` (canvas coordinates).
    fn select_at(&mut self, point: Point) -> Option<ShapeId>;

    /// Top-left of the canvas in device coordinates.
    fn canvas_origin(&self) -> Point;

    fn request_redraw(&mut self);
}

/// Document plus the transient state a running session needs.
#[derive(Debug, Clone)]
pub struct Scene {
    pub document: Document,
    temp: Option<ShapeProperties>,
    pending_reset: Option<Option<ToolKind>>,
    canvas_rect: Rect,
    needs_redraw: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl Scene {
    pub fn new(canvas_rect: Rect) -> Self {
        Self::with_document(Document::new(), canvas_rect)
    }

    pub fn with_document(document: Document, canvas_rect: Rect) -> Self {
        Self {
            document,
            temp: None,
            pending_reset: None,
            canvas_rect,
            needs_redraw: true,
        }
    }

    /// Current preview shape, if a gesture is in progress.
    pub fn temp(&self) -> Option<&ShapeProperties> {
        self.temp.as_ref()
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
        self.needs_redraw = true;
    }

    /// Take the tool reset requested since the last call.
    ///
    /// The outer `Option` says whether a reset was requested at all.
    pub fn take_tool_reset(&mut self) -> Option<Option<ToolKind>> {
        self.pending_reset.take()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Clear the redraw flag, returning whether it was set.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Remove every committed shape and any preview.
    pub fn clear(&mut self) {
        self.document.clear();
        self.temp = None;
        self.needs_redraw = true;
    }
}

impl SceneHost for Scene {
    fn finalize_shape(&mut self, shape: ShapeProperties) {
        self.document.add_shape(shape);
        self.temp = None;
        self.needs_redraw = true;
    }

    fn temp_shape(&mut self, shape: &ShapeProperties) {
        log::trace!("Preview {}", shape.kind().name());
        self.temp = Some(shape.clone());
        self.needs_redraw = true;
    }

    fn clear_temp_shape(&mut self) {
        if self.temp.take().is_some() {
            self.needs_redraw = true;
        }
    }

    fn tool_reset(&mut self, next: Option<ToolKind>) {
        self.pending_reset = Some(next);
    }

    fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let hit = self.document.select_at(point);
        log::debug!("Selection at ({}, {}): {:?}", point.x, point.y, hit);
        hit
    }

    fn canvas_origin(&self) -> Point {
        self.canvas_rect.origin()
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

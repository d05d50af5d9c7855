//! Rectangle and ellipse tools.

use super::{ShapeDraft, Tool, ToolKind, ToolOptions, canvas_point};
use crate::geometry::BoundingBox;
use crate::input::PointerEvent;
use crate::interaction::{Interaction, PointDragInteraction};
use crate::scene::SceneHost;
use crate::shapes::{ShapeKind, ShapePatch, ShapeProperties};
use kurbo::Point;

/// Draws a box-shaped figure by dragging from one corner to the other.
#[derive(Debug, Clone)]
pub struct DragBoxTool {
    kind: ToolKind,
    interaction: PointDragInteraction,
    draft: ShapeDraft,
}

impl DragBoxTool {
    pub fn rectangle(options: &ToolOptions) -> Self {
        Self::new(ToolKind::Rectangle, ShapeKind::Rectangle, options)
    }

    pub fn ellipse(options: &ToolOptions) -> Self {
        Self::new(ToolKind::Ellipse, ShapeKind::Ellipse, options)
    }

    fn new(kind: ToolKind, shape: ShapeKind, options: &ToolOptions) -> Self {
        Self {
            kind,
            interaction: PointDragInteraction::new(options.default_box_size),
            draft: ShapeDraft::new(shape, options),
        }
    }

    fn apply(&mut self, patch: Option<ShapePatch>, host: &mut dyn SceneHost) {
        if self.draft.apply(patch, host) {
            log::info!("{} committed", self.kind.name());
            self.interaction.reset();
            host.tool_reset(None);
        }
    }
}

impl Tool for DragBoxTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle_mouse_down(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        let patch = self.interaction.handle_mouse_down(point);
        self.apply(patch, host);
    }

    fn handle_mouse_move(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        let patch = self.interaction.handle_mouse_move(point);
        self.apply(patch, host);
    }

    fn handle_mouse_up(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        let patch = self.interaction.handle_mouse_up(point);
        if patch.is_none() && self.draft.is_drawing() {
            // Released on the anchor: nothing to keep.
            self.draft.discard();
            host.clear_temp_shape();
        }
        self.apply(patch, host);
    }

    fn handle_double_click(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        let patch = self.interaction.handle_double_click(point);
        self.apply(patch, host);
    }

    fn cancel(&mut self, host: &mut dyn SceneHost) {
        if self.interaction.is_active() || self.draft.is_drawing() {
            log::debug!("{} gesture cancelled", self.kind.name());
        }
        self.reset_gesture_state();
        host.clear_temp_shape();
    }

    fn hit_test(&self, point: Point) -> bool {
        self.draft
            .committed()
            .is_some_and(|shape| shape.hit_test(point))
    }

    fn properties(&self) -> Option<&ShapeProperties> {
        self.draft.properties()
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.draft.bounding_box()
    }

    fn reset_gesture_state(&mut self) {
        self.interaction.reset();
        if self.draft.is_drawing() {
            self.draft.discard();
        }
    }
}

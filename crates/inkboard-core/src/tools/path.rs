//! Polyline and arrow tools.

use super::{ShapeDraft, Tool, ToolKind, ToolOptions, canvas_point};
use crate::geometry::BoundingBox;
use crate::input::PointerEvent;
use crate::interaction::{Interaction, MultiPointInteraction};
use crate::scene::SceneHost;
use crate::shapes::{ShapeKind, ShapePatch, ShapeProperties};
use kurbo::Point;

/// Draws multi-vertex paths by clicking, or a single segment by dragging.
#[derive(Debug, Clone)]
pub struct PathTool {
    kind: ToolKind,
    interaction: MultiPointInteraction,
    draft: ShapeDraft,
}

impl PathTool {
    pub fn polyline(options: &ToolOptions) -> Self {
        Self {
            kind: ToolKind::Polyline,
            interaction: MultiPointInteraction::new(),
            draft: ShapeDraft::new(ShapeKind::Polyline, options),
        }
    }

    /// Arrows stop at two vertices and get a head on the last segment.
    pub fn arrow(options: &ToolOptions) -> Self {
        Self {
            kind: ToolKind::Arrow,
            interaction: MultiPointInteraction::line_only(),
            draft: ShapeDraft::new(ShapeKind::Arrow, options),
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

impl Tool for PathTool {
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
        self.apply(patch, host);
    }

    fn handle_double_click(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        let patch = self.interaction.handle_double_click(point);
        self.apply(patch, host);
    }

    fn cancel(&mut self, host: &mut dyn SceneHost) {
        if self.interaction.is_active() {
            log::debug!(
                "{} abandoned with {} vertices",
                self.kind.name(),
                self.interaction.vertices().len()
            );
        }
        self.reset_gesture_state();
        host.clear_temp_shape();
    }

    fn hit_test(&self, point: Point) -> bool {
        self.draft
            .bounding_box()
            .is_some_and(|bbox| bbox.contains(point))
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

//! Selection tool.

use super::{Tool, ToolKind, canvas_point};
use crate::geometry::BoundingBox;
use crate::input::PointerEvent;
use crate::scene::SceneHost;
use crate::shapes::ShapeProperties;
use kurbo::Point;

/// Selects the topmost committed shape under a click. Never draws.
#[derive(Debug, Clone, Default)]
pub struct PointerTool;

impl PointerTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for PointerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pointer
    }

    fn handle_mouse_down(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        let point = canvas_point(event, host);
        host.select_at(point);
        host.request_redraw();
    }

    fn handle_mouse_move(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn handle_mouse_up(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn handle_double_click(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn cancel(&mut self, _host: &mut dyn SceneHost) {}

    fn hit_test(&self, _point: Point) -> bool {
        false
    }

    fn properties(&self) -> Option<&ShapeProperties> {
        None
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        None
    }

    fn reset_gesture_state(&mut self) {}
}

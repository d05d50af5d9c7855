//! Forwards pointer events to the active tool.

use crate::input::PointerEvent;
use crate::scene::SceneHost;
use crate::tools::{TextInput, Tool, ToolKind};
use kurbo::Point;

/// Holds at most one tool and routes events to it.
///
/// Events arriving while no tool is installed are dropped.
#[derive(Default)]
pub struct EventRouter {
    tool: Option<Box<dyn Tool>>,
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("tool", &self.tool_kind())
            .finish()
    }
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(tool: Box<dyn Tool>) -> Self {
        Self { tool: Some(tool) }
    }

    /// Install `tool`, returning the one it replaces.
    pub fn set_tool(&mut self, tool: Option<Box<dyn Tool>>) -> Option<Box<dyn Tool>> {
        std::mem::replace(&mut self.tool, tool)
    }

    pub fn tool(&self) -> Option<&dyn Tool> {
        self.tool.as_deref()
    }

    pub fn tool_mut(&mut self) -> Option<&mut (dyn Tool + 'static)> {
        self.tool.as_deref_mut()
    }

    pub fn tool_kind(&self) -> Option<ToolKind> {
        self.tool.as_ref().map(|t| t.kind())
    }

    pub fn handle_mouse_down(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.handle_mouse_down(event, host);
        }
    }

    pub fn handle_mouse_move(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.handle_mouse_move(event, host);
        }
    }

    pub fn handle_mouse_up(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.handle_mouse_up(event, host);
        }
    }

    pub fn handle_double_click(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.handle_double_click(event, host);
        }
    }

    pub fn handle_text_input(&mut self, input: TextInput, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.handle_text_input(input, host);
        }
    }

    /// Cancel the active tool's gesture.
    pub fn reset(&mut self, host: &mut dyn SceneHost) {
        if let Some(tool) = &mut self.tool {
            tool.cancel(host);
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.tool.as_ref().is_some_and(|t| t.hit_test(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_host::{RecordingHost, at};
    use crate::tools::{ToolOptions, create_tool};

    #[test]
    fn test_events_without_tool_are_dropped() {
        let mut host = RecordingHost::default();
        let mut router = EventRouter::new();
        router.handle_mouse_down(&at(0.0, 0.0), &mut host);
        router.handle_mouse_up(&at(50.0, 50.0), &mut host);
        router.handle_double_click(&at(50.0, 50.0), &mut host);
        router.reset(&mut host);
        assert!(host.finalized.is_empty());
        assert!(!router.hit_test(Point::new(1.0, 1.0)));
        assert_eq!(router.tool_kind(), None);
    }

    #[test]
    fn test_set_tool_returns_previous() {
        let options = ToolOptions::default();
        let mut router = EventRouter::with_tool(create_tool(ToolKind::Rectangle, &options));
        let previous = router.set_tool(Some(create_tool(ToolKind::Arrow, &options)));
        assert_eq!(previous.map(|t| t.kind()), Some(ToolKind::Rectangle));
        assert_eq!(router.tool_kind(), Some(ToolKind::Arrow));
    }

    #[test]
    fn test_forwards_to_active_tool() {
        let mut host = RecordingHost::default();
        let mut router =
            EventRouter::with_tool(create_tool(ToolKind::Rectangle, &ToolOptions::default()));
        router.handle_mouse_down(&at(0.0, 0.0), &mut host);
        router.handle_mouse_move(&at(20.0, 20.0), &mut host);
        router.handle_mouse_up(&at(40.0, 40.0), &mut host);
        assert_eq!(host.finalized.len(), 1);
        assert!(router.hit_test(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_reset_cancels_gesture() {
        let mut host = RecordingHost::default();
        let mut router =
            EventRouter::with_tool(create_tool(ToolKind::Polyline, &ToolOptions::default()));
        router.handle_mouse_down(&at(0.0, 0.0), &mut host);
        router.reset(&mut host);
        router.handle_mouse_up(&at(80.0, 0.0), &mut host);
        assert!(host.finalized.is_empty());
        assert_eq!(host.temp_clears, 1);
    }
}

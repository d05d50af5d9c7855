//! Drawing session: the active tool, the scene and the glue between them.

use crate::config::SessionConfig;
use crate::document::Document;
use crate::input::{GestureEvent, InputState, PointerEvent, RawPointerEvent};
use crate::router::EventRouter;
use crate::scene::Scene;
use crate::shapes::ShapeProperties;
use crate::tools::{TextInput, Tool, ToolKind, create_tool};
use kurbo::{Point, Rect};
use std::time::Instant;

/// A single-user drawing session.
///
/// Positions passed in are device (client) coordinates; tools convert them
/// using the configured canvas rectangle.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    router: EventRouter,
    scene: Scene,
    input: InputState,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_document(config, Document::new())
    }

    pub fn with_document(config: SessionConfig, document: Document) -> Self {
        let tool = create_tool(config.default_tool, &config.tool_options());
        let scene = Scene::with_document(document, config.canvas_rect);
        Self {
            config,
            router: EventRouter::with_tool(tool),
            scene,
            input: InputState::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.scene.document
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The in-progress preview shape, if any.
    pub fn temp_shape(&self) -> Option<&ShapeProperties> {
        self.scene.temp()
    }

    pub fn tool(&self) -> Option<&dyn Tool> {
        self.router.tool()
    }

    pub fn tool_kind(&self) -> Option<ToolKind> {
        self.router.tool_kind()
    }

    /// Hit test against the active tool's last committed shape.
    pub fn hit_test(&self, point: Point) -> bool {
        self.router.hit_test(point)
    }

    /// Clear the redraw flag, returning whether a redraw was requested.
    pub fn take_redraw(&mut self) -> bool {
        self.scene.take_redraw()
    }

    /// Toolbar selection. Choosing the active tool again returns to the
    /// default tool.
    pub fn select_tool(&mut self, kind: ToolKind) {
        let next = if self.router.tool_kind() == Some(kind) {
            self.config.default_tool
        } else {
            kind
        };
        self.switch_tool(next);
    }

    /// Cancel the outgoing tool, then install a fresh `kind`.
    fn switch_tool(&mut self, kind: ToolKind) {
        let tool = create_tool(kind, &self.config.tool_options());
        self.router.reset(&mut self.scene);
        // A commit made by the cancel must not override the explicit choice.
        self.scene.take_tool_reset();
        self.router.set_tool(Some(tool));
        log::info!("Tool switched to {}", kind.name());
    }

    /// Honor a tool reset requested during the last event.
    fn apply_pending_reset(&mut self) {
        let Some(next) = self.scene.take_tool_reset() else {
            return;
        };
        if next.is_none() && self.config.keep_tool_after_commit {
            if let Some(tool) = self.router.tool_mut() {
                tool.reset_gesture_state();
            }
            return;
        }
        let kind = next.unwrap_or(self.config.default_tool);
        self.router
            .set_tool(Some(create_tool(kind, &self.config.tool_options())));
        log::info!("Tool reset to {}", kind.name());
    }

    fn dispatch(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Down(e) => self.router.handle_mouse_down(&e, &mut self.scene),
            GestureEvent::Move(e) => self.router.handle_mouse_move(&e, &mut self.scene),
            GestureEvent::Up(e) => self.router.handle_mouse_up(&e, &mut self.scene),
            GestureEvent::DoubleClick(e) => {
                self.router.handle_double_click(&e, &mut self.scene)
            }
        }
        self.apply_pending_reset();
    }

    pub fn mouse_down(&mut self, position: Point) {
        self.dispatch(GestureEvent::Down(PointerEvent::new(position)));
    }

    pub fn mouse_move(&mut self, position: Point) {
        self.dispatch(GestureEvent::Move(PointerEvent::new(position)));
    }

    pub fn mouse_up(&mut self, position: Point) {
        self.dispatch(GestureEvent::Up(PointerEvent::new(position)));
    }

    pub fn double_click(&mut self, position: Point) {
        self.dispatch(GestureEvent::DoubleClick(PointerEvent::new(position)));
    }

    /// Feed a raw event from a host that does not report double-clicks.
    pub fn handle_pointer_event(&mut self, event: RawPointerEvent) {
        self.handle_pointer_event_at(event, Instant::now());
    }

    /// Feed a raw event observed at `now`.
    pub fn handle_pointer_event_at(&mut self, event: RawPointerEvent, now: Instant) {
        for gesture in self.input.handle_pointer_event_at(event, now) {
            self.dispatch(gesture);
        }
    }

    pub fn text_input(&mut self, input: TextInput) {
        self.router.handle_text_input(input, &mut self.scene);
        self.apply_pending_reset();
    }

    /// Cancel the gesture in progress (Escape).
    pub fn cancel(&mut self) {
        self.router.reset(&mut self.scene);
        self.apply_pending_reset();
    }

    /// Remove every shape. A gesture in progress is dropped.
    pub fn clear(&mut self) {
        if let Some(tool) = self.router.tool_mut() {
            tool.reset_gesture_state();
        }
        self.scene.clear();
        log::info!("Document cleared");
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.config.canvas_rect = rect;
        self.scene.set_canvas_rect(rect);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

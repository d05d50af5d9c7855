//! Tool system for the whiteboard.
//!
//! A tool owns the state of one gesture: it converts pointer events to canvas
//! space, feeds them to its interpreter and reports previews and commits to a
//! [`SceneHost`].

mod drag_box;
mod path;
mod pointer;
mod text;

pub use drag_box::DragBoxTool;
pub use path::PathTool;
pub use pointer::PointerTool;
pub use text::TextTool;

use crate::geometry::{BoundingBox, to_canvas_point};
use crate::input::PointerEvent;
use crate::interaction::DEFAULT_BOX_SIZE;
use crate::scene::SceneHost;
use crate::shapes::{Font, SerializableColor, ShapeKind, ShapePatch, ShapeProperties};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Pointer,
    Rectangle,
    Ellipse,
    Polyline,
    Arrow,
    Text,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Pointer,
            ToolKind::Rectangle,
            ToolKind::Ellipse,
            ToolKind::Polyline,
            ToolKind::Arrow,
            ToolKind::Text,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pointer => "pointer",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
            ToolKind::Polyline => "polyline",
            ToolKind::Arrow => "arrow",
            ToolKind::Text => "text",
        }
    }

    /// Kind of shape this tool draws, `None` for the pointer.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Pointer => None,
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
            ToolKind::Polyline => Some(ShapeKind::Polyline),
            ToolKind::Arrow => Some(ShapeKind::Arrow),
            ToolKind::Text => Some(ShapeKind::Text),
        }
    }
}

/// Text entry edits delivered to the text tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInput {
    Insert(String),
    Backspace,
    Set(String),
}

/// Settings applied to shapes created by tools.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOptions {
    pub color: SerializableColor,
    pub font: Font,
    /// Edge length of a box inserted by double-click.
    pub default_box_size: f64,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            font: Font::default(),
            default_box_size: DEFAULT_BOX_SIZE,
        }
    }
}

/// A pointer-driven tool installed in the event router.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn handle_mouse_down(&mut self, event: &PointerEvent, host: &mut dyn SceneHost);
    fn handle_mouse_move(&mut self, event: &PointerEvent, host: &mut dyn SceneHost);
    fn handle_mouse_up(&mut self, event: &PointerEvent, host: &mut dyn SceneHost);
    fn handle_double_click(&mut self, event: &PointerEvent, host: &mut dyn SceneHost);

    /// Edit pending text. Only the text tool reacts.
    fn handle_text_input(&mut self, _input: TextInput, _host: &mut dyn SceneHost) {}

    /// Abandon (or, for text, commit) the gesture in progress.
    fn cancel(&mut self, host: &mut dyn SceneHost);

    /// Hit test against the last shape this tool committed.
    fn hit_test(&self, point: Point) -> bool;

    /// Properties of the shape being drawn or last committed.
    fn properties(&self) -> Option<&ShapeProperties>;

    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Drop gesture state so the tool can draw another shape.
    fn reset_gesture_state(&mut self);
}

/// Construct a fresh tool of the given kind.
pub fn create_tool(kind: ToolKind, options: &ToolOptions) -> Box<dyn Tool> {
    match kind {
        ToolKind::Pointer => Box::new(PointerTool::new()),
        ToolKind::Rectangle => Box::new(DragBoxTool::rectangle(options)),
        ToolKind::Ellipse => Box::new(DragBoxTool::ellipse(options)),
        ToolKind::Polyline => Box::new(PathTool::polyline(options)),
        ToolKind::Arrow => Box::new(PathTool::arrow(options)),
        ToolKind::Text => Box::new(TextTool::new(options)),
    }
}

/// Convert an event to canvas coordinates.
pub(crate) fn canvas_point(event: &PointerEvent, host: &dyn SceneHost) -> Point {
    to_canvas_point(event.position, host.canvas_origin())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftState {
    Idle,
    Drawing,
    Committed,
}

/// Accumulates interpreter patches into one shape and reports them to the host.
#[derive(Debug, Clone)]
pub(crate) struct ShapeDraft {
    kind: ShapeKind,
    color: SerializableColor,
    font: Font,
    props: ShapeProperties,
    state: DraftState,
    /// The last shape this draft committed.
    committed: Option<ShapeProperties>,
}

impl ShapeDraft {
    pub(crate) fn new(kind: ShapeKind, options: &ToolOptions) -> Self {
        Self {
            kind,
            color: options.color,
            font: options.font.clone(),
            props: ShapeProperties::new(kind, options.color, &options.font),
            state: DraftState::Idle,
            committed: None,
        }
    }

    /// Merge `patch`, then either preview or commit the shape.
    ///
    /// Returns true when the shape was committed.
    pub(crate) fn apply(&mut self, patch: Option<ShapePatch>, host: &mut dyn SceneHost) -> bool {
        let Some(patch) = patch else {
            return false;
        };
        if self.state != DraftState::Drawing {
            self.discard();
            self.state = DraftState::Drawing;
        }

        let is_final = patch.is_final();
        self.props.apply(patch);
        if !is_final {
            host.temp_shape(&self.props);
            return false;
        }

        self.state = DraftState::Committed;
        self.committed = Some(self.props.clone());
        host.finalize_shape(self.props.clone());
        true
    }

    /// Forget an uncommitted shape.
    pub(crate) fn discard(&mut self) {
        self.props = ShapeProperties::new(self.kind, self.color, &self.font);
        self.state = DraftState::Idle;
    }

    pub(crate) fn is_drawing(&self) -> bool {
        self.state == DraftState::Drawing
    }

    pub(crate) fn properties(&self) -> Option<&ShapeProperties> {
        match self.state {
            DraftState::Idle => None,
            DraftState::Drawing | DraftState::Committed => Some(&self.props),
        }
    }

    pub(crate) fn committed(&self) -> Option<&ShapeProperties> {
        self.committed.as_ref()
    }

    /// Bounds of the last committed shape.
    pub(crate) fn bounding_box(&self) -> Option<BoundingBox> {
        self.committed.as_ref()?.bounding_box()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tool_matches_kind() {
        let options = ToolOptions::default();
        for kind in ToolKind::all() {
            assert_eq!(create_tool(*kind, &options).kind(), *kind);
        }
    }

    #[test]
    fn test_shape_kind_mapping() {
        assert_eq!(ToolKind::Pointer.shape_kind(), None);
        assert_eq!(ToolKind::Arrow.shape_kind(), Some(ShapeKind::Arrow));
    }

    #[test]
    fn test_draft_previews_then_commits() {
        let mut host = test_host::RecordingHost::default();
        let mut draft = ShapeDraft::new(ShapeKind::Rectangle, &ToolOptions::default());
        assert!(draft.properties().is_none());

        let preview = ShapePatch::sized_box(Point::new(0.0, 0.0), 10.0, 10.0).preview();
        assert!(!draft.apply(Some(preview), &mut host));
        assert!(draft.is_drawing());
        assert_eq!(host.temps.len(), 1);

        let done = ShapePatch::sized_box(Point::new(0.0, 0.0), 20.0, 20.0).finalized();
        assert!(draft.apply(Some(done), &mut host));
        assert_eq!(host.finalized.len(), 1);
        assert!(!host.finalized[0].temp);
        assert!(draft.bounding_box().is_some());
    }

    #[test]
    fn test_draft_starts_fresh_after_commit() {
        let mut host = test_host::RecordingHost::default();
        let mut draft = ShapeDraft::new(ShapeKind::Polyline, &ToolOptions::default());
        draft.apply(Some(ShapePatch::vertex(Point::new(0.0, 0.0)).preview()), &mut host);
        draft.apply(Some(ShapePatch::vertex(Point::new(50.0, 0.0)).finalized()), &mut host);

        draft.apply(Some(ShapePatch::vertex(Point::new(7.0, 7.0)).preview()), &mut host);
        let path = draft.properties().and_then(|p| p.as_path()).unwrap();
        assert_eq!(path.vertices, vec![Point::new(7.0, 7.0)]);
    }

    #[test]
    fn test_text_input_serde() {
        let input: TextInput = serde_json::from_str(r#"{"insert":"hi"}"#).unwrap();
        assert_eq!(input, TextInput::Insert("hi".to_string()));
        let input: TextInput = serde_json::from_str(r#""backspace""#).unwrap();
        assert_eq!(input, TextInput::Backspace);
    }
}

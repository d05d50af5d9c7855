//! Text label tool.

use super::{TextInput, Tool, ToolKind, ToolOptions, canvas_point};
use crate::geometry::BoundingBox;
use crate::input::PointerEvent;
use crate::scene::SceneHost;
use crate::shapes::{
    ApproximateTextMeasure, Geometry, ShapeKind, ShapePatch, ShapeProperties, TextMeasure,
};
use kurbo::Point;

/// Places a text label: the first click opens an entry, the next click (or
/// cancel) commits it.
pub struct TextTool {
    options: ToolOptions,
    measure: Box<dyn TextMeasure>,
    /// Shape under edit while the entry is open.
    editing: Option<ShapeProperties>,
    committed: Option<ShapeProperties>,
}

impl std::fmt::Debug for TextTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextTool")
            .field("editing", &self.editing)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}

impl TextTool {
    pub fn new(options: &ToolOptions) -> Self {
        Self::with_measure(options, Box::new(ApproximateTextMeasure))
    }

    pub fn with_measure(options: &ToolOptions, measure: Box<dyn TextMeasure>) -> Self {
        Self {
            options: options.clone(),
            measure,
            editing: None,
            committed: None,
        }
    }

    /// Text currently in the entry, if it is open.
    pub fn pending_text(&self) -> Option<&str> {
        self.editing.as_ref()?.as_text().map(|t| t.text.as_str())
    }

    fn open_entry(&mut self, point: Point, host: &mut dyn SceneHost) {
        log::debug!("Text entry opened at ({}, {})", point.x, point.y);
        let mut shape =
            ShapeProperties::new(ShapeKind::Text, self.options.color, &self.options.font);
        shape.apply(ShapePatch::sized_box(point, 0.0, 0.0).preview());
        host.temp_shape(&shape);
        self.editing = Some(shape);
    }

    /// Refresh the measured extent of the edited text.
    fn remeasure(&self, shape: &mut ShapeProperties) {
        if let Geometry::Text(text) = &mut shape.geometry {
            let size = self.measure.measure(&text.text, &text.font);
            text.width = size.width;
            text.height = size.height;
        }
    }

    /// Commit the entry, or drop it if nothing was typed.
    fn save_text(&mut self, host: &mut dyn SceneHost) {
        let Some(mut shape) = self.editing.take() else {
            return;
        };
        let is_empty = shape.as_text().is_none_or(|t| t.text.is_empty());
        if is_empty {
            log::debug!("Empty text entry discarded");
            host.clear_temp_shape();
            return;
        }

        self.remeasure(&mut shape);
        shape.apply(ShapePatch::default().finalized());
        log::info!("text committed");
        self.committed = Some(shape.clone());
        host.finalize_shape(shape);
        host.tool_reset(None);
    }
}

impl Tool for TextTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Text
    }

    fn handle_mouse_down(&mut self, event: &PointerEvent, host: &mut dyn SceneHost) {
        if self.editing.is_some() {
            self.save_text(host);
        } else {
            let point = canvas_point(event, host);
            self.open_entry(point, host);
        }
    }

    fn handle_mouse_move(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn handle_mouse_up(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn handle_double_click(&mut self, _event: &PointerEvent, _host: &mut dyn SceneHost) {}

    fn handle_text_input(&mut self, input: TextInput, host: &mut dyn SceneHost) {
        let Some(mut shape) = self.editing.take() else {
            log::debug!("Text input ignored, no entry open");
            return;
        };
        if let Geometry::Text(text) = &mut shape.geometry {
            match input {
                TextInput::Insert(s) => text.text.push_str(&s),
                TextInput::Backspace => {
                    text.text.pop();
                }
                TextInput::Set(s) => text.text = s,
            }
        }
        self.remeasure(&mut shape);
        host.temp_shape(&shape);
        self.editing = Some(shape);
    }

    fn cancel(&mut self, host: &mut dyn SceneHost) {
        self.save_text(host);
    }

    fn hit_test(&self, point: Point) -> bool {
        self.committed
            .as_ref()
            .is_some_and(|shape| shape.hit_test(point))
    }

    fn properties(&self) -> Option<&ShapeProperties> {
        self.editing.as_ref().or(self.committed.as_ref())
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.committed.as_ref()?.bounding_box()
    }

    fn reset_gesture_state(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_host::{RecordingHost, at};
    use kurbo::Size;

    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&self, text: &str, _font: &crate::shapes::Font) -> Size {
            Size::new(text.len() as f64 * 10.0, 20.0)
        }
    }

    #[test]
    fn test_type_and_commit_on_second_click() {
        let mut host = RecordingHost::default();
        let mut tool = TextTool::with_measure(&ToolOptions::default(), Box::new(FixedMeasure));

        tool.handle_mouse_down(&at(40.0, 50.0), &mut host);
        assert_eq!(tool.pending_text(), Some(""));
        tool.handle_text_input(TextInput::Insert("Helo".into()), &mut host);
        tool.handle_text_input(TextInput::Backspace, &mut host);
        tool.handle_text_input(TextInput::Insert("lo".into()), &mut host);
        assert_eq!(tool.pending_text(), Some("Hello"));

        tool.handle_mouse_down(&at(300.0, 300.0), &mut host);
        assert_eq!(host.finalized.len(), 1);
        assert_eq!(host.resets, vec![None]);

        let text = host.finalized[0].as_text().unwrap();
        assert_eq!(text.text, "Hello");
        assert_eq!(text.origin, Point::new(40.0, 50.0));
        assert!((text.width - 50.0).abs() < f64::EPSILON);
        assert!((text.height - 20.0).abs() < f64::EPSILON);
        assert!(tool.hit_test(Point::new(60.0, 60.0)));
    }

    #[test]
    fn test_empty_entry_aborts_silently() {
        let mut host = RecordingHost::default();
        let mut tool = TextTool::new(&ToolOptions::default());
        tool.handle_mouse_down(&at(10.0, 10.0), &mut host);
        tool.handle_mouse_down(&at(20.0, 20.0), &mut host);

        assert!(host.finalized.is_empty());
        assert!(host.resets.is_empty());
        assert_eq!(host.temp_clears, 1);
        assert!(tool.pending_text().is_none());
    }

    #[test]
    fn test_cancel_commits_text() {
        let mut host = RecordingHost::default();
        let mut tool = TextTool::new(&ToolOptions::default());
        tool.handle_mouse_down(&at(10.0, 10.0), &mut host);
        tool.handle_text_input(TextInput::Set("note".into()), &mut host);
        tool.cancel(&mut host);
        assert_eq!(host.finalized.len(), 1);
        assert_eq!(host.finalized[0].as_text().unwrap().text, "note");
    }

    #[test]
    fn test_input_without_entry_is_ignored() {
        let mut host = RecordingHost::default();
        let mut tool = TextTool::new(&ToolOptions::default());
        tool.handle_text_input(TextInput::Insert("x".into()), &mut host);
        assert!(host.temps.is_empty());
        assert!(tool.properties().is_none());
    }

    #[test]
    fn test_preview_tracks_typing() {
        let mut host = RecordingHost::default();
        let mut tool = TextTool::new(&ToolOptions::default());
        tool.handle_mouse_down(&at(0.0, 0.0), &mut host);
        tool.handle_text_input(TextInput::Insert("ab".into()), &mut host);
        let preview = host.temps.last().unwrap();
        assert!(preview.temp);
        assert_eq!(preview.as_text().unwrap().text, "ab");
        assert!(preview.as_text().unwrap().width > 0.0);
    }
}

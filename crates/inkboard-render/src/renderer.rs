//! Frame rendering.

use crate::shape_renderer::{RenderStyle, render_selection_box, render_shape};
use crate::surface::Surface;
use inkboard_core::document::Document;
use inkboard_core::shapes::ShapeProperties;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    pub document: &'a Document,
    /// In-progress preview, drawn above everything else.
    pub temp: Option<&'a ShapeProperties>,
    pub background_color: Color,
    pub style: RenderStyle,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            temp: None,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            style: RenderStyle::default(),
        }
    }

    pub fn with_temp(mut self, temp: Option<&'a ShapeProperties>) -> Self {
        self.temp = temp;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}

/// Draw a full frame: committed shapes in document order, selection boxes
/// for selected shapes, then the preview on top.
pub fn render_scene(ctx: &RenderContext, surface: &mut dyn Surface) {
    surface.clear(ctx.background_color);
    for shape in ctx.document.shapes() {
        render_shape(shape, &ctx.style, surface);
        if shape.selected {
            render_selection_box(shape, &ctx.style, surface);
        }
    }
    if let Some(temp) = ctx.temp {
        render_shape(temp, &ctx.style, surface);
    }
    log::trace!("Rendered {} shapes", ctx.document.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use inkboard_core::session::Session;
    use inkboard_core::tools::ToolKind;
    use kurbo::Point;

    #[test]
    fn test_render_order_and_selection() {
        let mut session = Session::default();
        session.select_tool(ToolKind::Rectangle);
        session.mouse_down(Point::new(0.0, 0.0));
        session.mouse_up(Point::new(50.0, 50.0));
        session.mouse_down(Point::new(25.0, 25.0));
        session.mouse_up(Point::new(25.0, 25.0));

        session.select_tool(ToolKind::Polyline);
        session.mouse_down(Point::new(100.0, 100.0));
        session.mouse_move(Point::new(120.0, 100.0));

        let mut surface = RecordingSurface::new();
        let ctx = RenderContext::new(session.document()).with_temp(session.temp_shape());
        render_scene(&ctx, &mut surface);

        let commands = surface.commands();
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        // rectangle, its selection box, the polyline preview
        assert_eq!(commands.len(), 4);
        let DrawCommand::Stroke { dashes, .. } = &commands[2] else {
            panic!("expected selection stroke");
        };
        assert_eq!(dashes, &vec![3.0, 3.0]);
        let DrawCommand::Stroke { dashes, .. } = &commands[3] else {
            panic!("expected preview stroke");
        };
        assert_eq!(dashes, &vec![2.0, 5.0]);
    }

    #[test]
    fn test_empty_document_only_clears() {
        let document = Document::new();
        let mut surface = RecordingSurface::new();
        let ctx = RenderContext::new(&document).with_background(Color::WHITE);
        render_scene(&ctx, &mut surface);
        assert_eq!(surface.commands(), &[DrawCommand::Clear(Color::WHITE)]);
    }
}

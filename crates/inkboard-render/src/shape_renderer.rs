//! Per-kind shape rendering.
//!
//! Each [`ShapeKind`] maps to a pair of functions: one drawing the shape and
//! one drawing its selection box. Committed shapes, previews and the shape a
//! tool is holding all go through the same table.

use crate::surface::Surface;
use inkboard_core::geometry::BoundingBox;
use inkboard_core::shapes::{Geometry, ShapeKind, ShapeProperties, StrokeStyle};
use inkboard_core::tools::Tool;
use kurbo::{BezPath, Line, Shape as KurboShape, Stroke};
use peniko::Color;

/// Dash pattern of preview strokes.
const PREVIEW_DASHES: [f64; 2] = [2.0, 5.0];
/// Dash pattern of selection boxes.
const SELECTION_DASHES: [f64; 2] = [3.0, 3.0];
/// Gap between a shape and its selection box.
pub const SELECTION_PADDING: f64 = 10.0;

/// Style settings shared by every shape in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub stroke_width: f64,
    pub selection_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
        }
    }
}

type RenderFn = fn(&ShapeProperties, &RenderStyle, &mut dyn Surface);

/// Render entry points for one shape kind.
pub struct ShapeRenderer {
    pub render: RenderFn,
    pub render_selection_box: RenderFn,
}

static RECTANGLE: ShapeRenderer = ShapeRenderer {
    render: render_rectangle,
    render_selection_box: render_bounds_selection,
};

static ELLIPSE: ShapeRenderer = ShapeRenderer {
    render: render_ellipse,
    render_selection_box: render_bounds_selection,
};

static POLYLINE: ShapeRenderer = ShapeRenderer {
    render: render_polyline,
    render_selection_box: render_bounds_selection,
};

static ARROW: ShapeRenderer = ShapeRenderer {
    render: render_arrow,
    render_selection_box: render_bounds_selection,
};

static TEXT: ShapeRenderer = ShapeRenderer {
    render: render_text,
    render_selection_box: render_bounds_selection,
};

/// Look up the renderer for a kind.
pub fn shape_renderer(kind: ShapeKind) -> &'static ShapeRenderer {
    match kind {
        ShapeKind::Rectangle => &RECTANGLE,
        ShapeKind::Ellipse => &ELLIPSE,
        ShapeKind::Polyline => &POLYLINE,
        ShapeKind::Arrow => &ARROW,
        ShapeKind::Text => &TEXT,
    }
}

pub fn render_shape(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    (shape_renderer(shape.kind()).render)(shape, style, surface);
}

pub fn render_selection_box(
    shape: &ShapeProperties,
    style: &RenderStyle,
    surface: &mut dyn Surface,
) {
    (shape_renderer(shape.kind()).render_selection_box)(shape, style, surface);
}

fn shape_stroke(shape: &ShapeProperties, style: &RenderStyle) -> Stroke {
    let stroke = Stroke::new(style.stroke_width);
    match shape.stroke_style {
        StrokeStyle::Solid => stroke,
        StrokeStyle::Dashed => stroke.with_dashes(0.0, PREVIEW_DASHES),
    }
}

fn stroke_shape(
    path: &BezPath,
    shape: &ShapeProperties,
    style: &RenderStyle,
    surface: &mut dyn Surface,
) {
    if path.elements().is_empty() {
        return;
    }
    surface.stroke_path(path, &shape_stroke(shape, style), shape.color.into());
}

fn render_rectangle(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    if let Geometry::Rectangle(b) = &shape.geometry {
        stroke_shape(&b.rect_path(), shape, style, surface);
    }
}

fn render_ellipse(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    if let Geometry::Ellipse(b) = &shape.geometry {
        stroke_shape(&b.ellipse_path(), shape, style, surface);
    }
}

fn render_polyline(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    if let Geometry::Polyline(p) = &shape.geometry {
        stroke_shape(&p.to_path(), shape, style, surface);
    }
}

fn render_arrow(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    if let Geometry::Arrow(p) = &shape.geometry {
        stroke_shape(&p.to_arrow_path(), shape, style, surface);
    }
}

fn render_text(shape: &ShapeProperties, style: &RenderStyle, surface: &mut dyn Surface) {
    let Geometry::Text(text) = &shape.geometry else {
        return;
    };
    if text.text.is_empty() {
        // Open entry with nothing typed yet: draw a caret
        let caret = Line::new(
            text.origin,
            (text.origin.x, text.origin.y + text.font.size * 1.2),
        );
        let stroke = Stroke::new(style.stroke_width);
        surface.stroke_path(
            &caret.to_path(0.1),
            &stroke,
            Color::from_rgba8(100, 100, 100, 200),
        );
        return;
    }
    surface.fill_text(&text.text, text.baseline(), &text.font);
}

fn render_bounds_selection(
    shape: &ShapeProperties,
    style: &RenderStyle,
    surface: &mut dyn Surface,
) {
    if let Some(bbox) = shape.bounding_box() {
        stroke_selection(bbox, style, surface);
    }
}

fn stroke_selection(bbox: BoundingBox, style: &RenderStyle, surface: &mut dyn Surface) {
    let path = bbox.padded(SELECTION_PADDING).to_rect().to_path(0.1);
    let stroke = Stroke::new(1.0).with_dashes(0.0, SELECTION_DASHES);
    surface.stroke_path(&path, &stroke, style.selection_color);
}

/// Rendering for whatever shape a tool currently holds.
pub trait ToolRender {
    fn render(&self, style: &RenderStyle, surface: &mut dyn Surface);
    fn render_selection_box(&self, style: &RenderStyle, surface: &mut dyn Surface);
}

impl<T: Tool + ?Sized> ToolRender for T {
    fn render(&self, style: &RenderStyle, surface: &mut dyn Surface) {
        if let Some(shape) = self.properties() {
            render_shape(shape, style, surface);
        }
    }

    fn render_selection_box(&self, style: &RenderStyle, surface: &mut dyn Surface) {
        if let Some(bbox) = self.bounding_box() {
            stroke_selection(bbox, style, surface);
        }
    }
}

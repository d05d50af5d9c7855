//! Inkboard Render Library
//!
//! Drawing-surface abstraction and per-kind shape rendering for Inkboard.

mod recording;
mod renderer;
mod shape_renderer;
mod surface;
mod svg;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{RenderContext, RenderResult, RendererError, render_scene};
pub use shape_renderer::{
    RenderStyle, SELECTION_PADDING, ShapeRenderer, ToolRender, render_selection_box, render_shape,
    shape_renderer,
};
pub use surface::Surface;
pub use svg::SvgSurface;

//! A surface that records draw calls.

use crate::surface::Surface;
use inkboard_core::shapes::Font;
use kurbo::{BezPath, Point, Stroke};
use peniko::Color;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Stroke {
        path: BezPath,
        width: f64,
        dashes: Vec<f64>,
        color: Color,
    },
    Text {
        text: String,
        position: Point,
        font: Font,
    },
}

/// Surface keeping every command in order. Useful for tests and replay.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Stroke commands only.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width: stroke.width,
            dashes: stroke.dash_pattern.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, position: Point, font: &Font) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font: font.clone(),
        });
    }
}

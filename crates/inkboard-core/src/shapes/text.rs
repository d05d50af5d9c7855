//! Text shape geometry and measurement.

use super::SerializableColor;
use crate::geometry::BoundingBox;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Serif,
    Monospace,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Bold,
}

impl FontStyle {
    pub fn name(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Bold => "bold",
        }
    }
}

/// Font used for text shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: FontFamily,
    /// Size in canvas pixels.
    pub size: f64,
    pub style: FontStyle,
    pub color: SerializableColor,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: 16.0,
            style: FontStyle::default(),
            color: SerializableColor::black(),
        }
    }
}

/// Text geometry: an anchored string with its measured extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGeometry {
    /// Top-left corner of the text box.
    pub origin: Point,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl TextGeometry {
    pub fn new(origin: Point, font: Font) -> Self {
        Self {
            origin,
            text: String::new(),
            font,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.origin, self.width, self.height)
    }

    /// Baseline position of the first line.
    pub fn baseline(&self) -> Point {
        Point::new(self.origin.x, self.origin.y + self.font.size)
    }
}

/// Measures the rendered extent of a string.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Character-count heuristic used when no real font metrics are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateTextMeasure;

impl ApproximateTextMeasure {
    fn char_width_factor(font: &Font) -> f64 {
        // Empirical average glyph widths relative to the font size
        let base = match font.family {
            FontFamily::Helvetica => 0.55,
            FontFamily::Serif => 0.5,
            FontFamily::Monospace => 0.6,
        };
        match font.style {
            FontStyle::Bold => base + 0.05,
            FontStyle::Normal | FontStyle::Italic => base,
        }
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let max_line_len = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let mut line_count = text.lines().count().max(1);
        if text.ends_with('\n') {
            line_count += 1;
        }
        Size::new(
            max_line_len as f64 * font.size * Self::char_width_factor(font),
            line_count as f64 * font.size * 1.2,
        )
    }
}

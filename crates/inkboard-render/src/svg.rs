//! SVG output surface.

use crate::renderer::RenderResult;
use crate::surface::Surface;
use inkboard_core::shapes::{Font, FontStyle};
use kurbo::{BezPath, Point, Stroke};
use peniko::Color;
use std::fmt::Write as _;
use std::path::Path;

/// Builds an SVG document from draw calls.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    title: Option<String>,
    body: String,
}

fn css_color(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    (
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
        f32::from(rgba.a) / 255.0,
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            body: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The complete SVG document.
    pub fn finish(&self) -> String {
        let title = self
            .title
            .as_deref()
            .map(|t| format!("<title>{}</title>\n", escape_xml(t)))
            .unwrap_or_default();
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{title}{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        std::fs::write(path.as_ref(), self.finish())?;
        log::info!("Wrote SVG to {}", path.as_ref().display());
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Color) {
        self.body.clear();
        let (fill, opacity) = css_color(color);
        writeln!(
            self.body,
            "<rect width=\"100%\" height=\"100%\" fill=\"{fill}\" fill-opacity=\"{opacity}\"/>"
        )
        .ok();
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        let (stroke_color, opacity) = css_color(color);
        let mut attrs = format!(
            "fill=\"none\" stroke=\"{stroke_color}\" stroke-opacity=\"{opacity}\" stroke-width=\"{}\"",
            stroke.width
        );
        if !stroke.dash_pattern.is_empty() {
            let dashes: Vec<String> = stroke.dash_pattern.iter().map(|d| d.to_string()).collect();
            write!(attrs, " stroke-dasharray=\"{}\"", dashes.join(" ")).ok();
        }
        writeln!(self.body, "<path d=\"{}\" {attrs}/>", path.to_svg()).ok();
    }

    fn fill_text(&mut self, text: &str, position: Point, font: &Font) {
        let (fill, opacity) = css_color(font.color.into());
        let style_attr = match font.style {
            FontStyle::Normal => String::new(),
            FontStyle::Italic => " font-style=\"italic\"".to_string(),
            FontStyle::Bold => " font-weight=\"bold\"".to_string(),
        };
        writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{fill}\" fill-opacity=\"{opacity}\"{style_attr} xml:space=\"preserve\">{}</text>",
            position.x,
            position.y,
            font.family.name(),
            font.size,
            escape_xml(text)
        )
        .ok();
    }
}

//! Headless application: config, error type and script replay.

use crate::script::{Script, ScriptStep};
use inkboard_core::document::DocumentError;
use inkboard_core::input::{MouseButton, RawPointerEvent};
use inkboard_core::shapes::SerializableColor;
use inkboard_core::tools::TextInput;
use inkboard_core::{Session, SessionConfig};
use inkboard_render::{RenderContext, RenderStyle, RendererError, SvgSurface, render_scene};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("{0}")]
    Usage(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: SerializableColor,
    pub selection_color: SerializableColor,
    pub stroke_width: f64,
    pub session: SessionConfig,
    /// Where to write the document JSON, if anywhere.
    pub document_output: Option<PathBuf>,
    /// Where to write the SVG rendering, if anywhere.
    pub svg_output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Inkboard".to_string(),
            width: 1280,
            height: 800,
            background_color: SerializableColor::new(250, 250, 250, 255),
            selection_color: SerializableColor::new(59, 130, 246, 255),
            stroke_width: 2.0,
            session: SessionConfig::default(),
            document_output: None,
            svg_output: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The headless shell: a session plus output settings.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    session: Session,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let session = Session::new(config.session.clone());
        Self { config, session }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replay one step.
    pub fn apply(&mut self, step: &ScriptStep) {
        log::debug!("Step {step:?}");
        let session = &mut self.session;
        match step {
            ScriptStep::SelectTool { tool } => session.select_tool(*tool),
            ScriptStep::Down { x, y } => session.mouse_down(Point::new(*x, *y)),
            ScriptStep::Move { x, y } => session.mouse_move(Point::new(*x, *y)),
            ScriptStep::Up { x, y } => session.mouse_up(Point::new(*x, *y)),
            ScriptStep::Click { x, y } => {
                session.mouse_down(Point::new(*x, *y));
                session.mouse_up(Point::new(*x, *y));
            }
            ScriptStep::DoubleClick { x, y } => session.double_click(Point::new(*x, *y)),
            ScriptStep::Press { x, y } => session.handle_pointer_event(RawPointerEvent::Down {
                position: Point::new(*x, *y),
                button: MouseButton::Left,
            }),
            ScriptStep::Release { x, y } => session.handle_pointer_event(RawPointerEvent::Up {
                position: Point::new(*x, *y),
                button: MouseButton::Left,
            }),
            ScriptStep::Type { text } => session.text_input(TextInput::Insert(text.clone())),
            ScriptStep::Backspace => session.text_input(TextInput::Backspace),
            ScriptStep::Cancel => session.cancel(),
            ScriptStep::Clear => session.clear(),
        }
    }

    /// Replay every step in order.
    pub fn run(&mut self, steps: &[ScriptStep]) {
        for step in steps {
            self.apply(step);
        }
        log::info!(
            "Replayed {} steps, document has {} shapes",
            steps.len(),
            self.session.document().len()
        );
    }

    /// Render the current frame to SVG.
    pub fn render_svg(&self) -> SvgSurface {
        let mut surface =
            SvgSurface::new(f64::from(self.config.width), f64::from(self.config.height))
                .with_title(self.config.title.clone());
        let style = RenderStyle {
            stroke_width: self.config.stroke_width,
            selection_color: self.config.selection_color.into(),
        };
        let ctx = RenderContext::new(self.session.document())
            .with_temp(self.session.temp_shape())
            .with_background(self.config.background_color.into())
            .with_style(style);
        render_scene(&ctx, &mut surface);
        surface
    }

    /// Write the configured outputs.
    pub fn save_outputs(&self) -> AppResult<()> {
        if let Some(path) = &self.config.document_output {
            std::fs::write(path, self.session.document().to_json()?)?;
            log::info!("Wrote document to {}", path.display());
        }
        if let Some(path) = &self.config.svg_output {
            self.render_svg().write_to(path)?;
        }
        Ok(())
    }
}

/// Load a script, replay it and write its outputs.
///
/// `svg_output` overrides the script's configured SVG path.
pub fn run_script_file(path: &Path, svg_output: Option<PathBuf>) -> AppResult<App> {
    let json = std::fs::read_to_string(path)?;
    let mut script = Script::from_json(&json)?;
    if svg_output.is_some() {
        script.config.svg_output = svg_output;
    }
    log::info!("Running {} ({} steps)", path.display(), script.steps.len());

    let mut app = App::new(script.config);
    app.run(&script.steps);
    app.save_outputs()?;
    Ok(app)
}

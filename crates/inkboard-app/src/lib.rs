//! Inkboard Application
//!
//! A headless application shell: it loads a gesture script, replays it
//! through a drawing session and writes the resulting document and rendering.

mod app;
mod script;

pub use app::{App, AppConfig, AppError, AppResult, run_script_file};
pub use script::{Script, ScriptStep};

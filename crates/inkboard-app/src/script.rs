//! Gesture scripts: recorded user input replayed by the headless shell.

use crate::app::AppConfig;
use inkboard_core::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// One user action. Coordinates are device (client) pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Toolbar button; selecting the active tool again returns to the default.
    SelectTool { tool: ToolKind },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Down followed by up at the same point.
    Click { x: f64, y: f64 },
    /// Native double-click event.
    DoubleClick { x: f64, y: f64 },
    /// Raw press; double-clicks are synthesized from these.
    Press { x: f64, y: f64 },
    /// Raw release.
    Release { x: f64, y: f64 },
    Type { text: String },
    Backspace,
    Cancel,
    Clear,
}

/// A configuration plus the steps to replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: AppConfig,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

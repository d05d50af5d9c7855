//! Session configuration.

use crate::interaction::DEFAULT_BOX_SIZE;
use crate::shapes::{Font, SerializableColor};
use crate::tools::{ToolKind, ToolOptions};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Drawing session configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Canvas rectangle in device coordinates.
    pub canvas_rect: Rect,
    /// Tool installed at startup and after each commit.
    pub default_tool: ToolKind,
    /// Stroke color for new shapes.
    pub color: SerializableColor,
    pub font: Font,
    /// Edge length of a box inserted by double-click.
    pub default_box_size: f64,
    /// Keep drawing with the same tool after a commit instead of returning
    /// to the default tool.
    pub keep_tool_after_commit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::new(0.0, 0.0, 1280.0, 800.0),
            default_tool: ToolKind::Pointer,
            color: SerializableColor::black(),
            font: Font::default(),
            default_box_size: DEFAULT_BOX_SIZE,
            keep_tool_after_commit: false,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Options handed to every tool the session creates.
    pub fn tool_options(&self) -> ToolOptions {
        ToolOptions {
            color: self.color,
            font: self.font.clone(),
            default_box_size: self.default_box_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SessionConfig::from_json(
            r#"{"default_box_size": 40.0, "keep_tool_after_commit": true, "default_tool": "rectangle"}"#,
        )
        .unwrap();
        assert!((config.default_box_size - 40.0).abs() < f64::EPSILON);
        assert!(config.keep_tool_after_commit);
        assert_eq!(config.default_tool, ToolKind::Rectangle);
        assert!((config.font.size - 16.0).abs() < f64::EPSILON);
        assert!((config.tool_options().default_box_size - 40.0).abs() < f64::EPSILON);
    }
}

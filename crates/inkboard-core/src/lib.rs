//! Inkboard Core Library
//!
//! Platform-agnostic drawing-session logic for the Inkboard whiteboard:
//! shape data, gesture interpreters, shape tools and the event routing that
//! connects them to a host.

pub mod config;
pub mod document;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod router;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod tools;

pub use config::SessionConfig;
pub use document::{Document, DocumentError, DocumentResult};
pub use geometry::{BoundingBox, PROXIMITY_THRESHOLD};
pub use input::{InputState, MouseButton, PointerEvent, RawPointerEvent};
pub use interaction::{Interaction, MultiPointInteraction, PointDragInteraction};
pub use router::EventRouter;
pub use scene::{Scene, SceneHost};
pub use session::Session;
pub use shapes::{ShapeId, ShapeKind, ShapePatch, ShapeProperties};
pub use tools::{TextInput, Tool, ToolKind, ToolOptions, create_tool};

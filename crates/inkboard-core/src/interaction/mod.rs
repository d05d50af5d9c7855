//! Gesture interpreters.
//!
//! An interpreter consumes pointer events in canvas space and emits
//! [`ShapePatch`] updates. It knows nothing about shapes, documents or hosts;
//! the owning tool merges the patches and decides where they go.

mod multi_point;
mod point_drag;

pub use multi_point::MultiPointInteraction;
pub use point_drag::{DEFAULT_BOX_SIZE, PointDragInteraction};

use crate::shapes::ShapePatch;
use kurbo::Point;

/// A stateful pointer-gesture recognizer.
pub trait Interaction {
    fn handle_mouse_down(&mut self, point: Point) -> Option<ShapePatch>;
    fn handle_mouse_move(&mut self, point: Point) -> Option<ShapePatch>;
    fn handle_mouse_up(&mut self, point: Point) -> Option<ShapePatch>;
    fn handle_double_click(&mut self, point: Point) -> Option<ShapePatch>;

    /// Forget any gesture in progress.
    fn reset(&mut self);

    /// Whether a gesture has started and not yet completed.
    fn is_active(&self) -> bool;
}

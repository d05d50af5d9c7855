//! Pointer input types and double-click synthesis.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// A positioned pointer event as delivered to tools.
///
/// `position` is in device (client) coordinates; tools convert it to canvas
/// space using the host's canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    #[serde(default)]
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Left,
        }
    }
}

/// Raw pointer event from a host without native double-click events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Gesture-level event forwarded to the active tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    DoubleClick(PointerEvent),
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME_MS: u128 = 500;
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Tracks pointer state across raw events and turns them into gestures.
///
/// A double-click is recognized on the second left press and delivered after
/// the matching release, the order browsers use.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in client coordinates.
    pub pointer_position: Point,
    pressed_buttons: HashSet<MouseButton>,
    last_click_time: Option<Instant>,
    last_click_position: Option<Point>,
    /// Double-click waiting for its release.
    pending_double_click: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Process a raw event at the current time.
    pub fn handle_pointer_event(&mut self, event: RawPointerEvent) -> Vec<GestureEvent> {
        self.handle_pointer_event_at(event, Instant::now())
    }

    /// Process a raw event observed at `now`.
    pub fn handle_pointer_event_at(
        &mut self,
        event: RawPointerEvent,
        now: Instant,
    ) -> Vec<GestureEvent> {
        match event {
            RawPointerEvent::Down { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.insert(button);
                if button != MouseButton::Left {
                    return Vec::new();
                }

                let is_double = match (self.last_click_time, self.last_click_position) {
                    (Some(last_time), Some(last_pos)) => {
                        let elapsed = now.duration_since(last_time).as_millis();
                        let distance = ((position.x - last_pos.x).powi(2)
                            + (position.y - last_pos.y).powi(2))
                        .sqrt();
                        elapsed < DOUBLE_CLICK_TIME_MS && distance < DOUBLE_CLICK_DISTANCE
                    }
                    _ => false,
                };

                if is_double {
                    self.pending_double_click = true;
                    // Reset so a triple-click is not a second double-click
                    self.last_click_time = None;
                    self.last_click_position = None;
                } else {
                    self.last_click_time = Some(now);
                    self.last_click_position = Some(position);
                }
                vec![GestureEvent::Down(PointerEvent { position, button })]
            }
            RawPointerEvent::Up { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.remove(&button);
                if button != MouseButton::Left {
                    return Vec::new();
                }

                let event = PointerEvent { position, button };
                let mut events = vec![GestureEvent::Up(event)];
                if std::mem::take(&mut self.pending_double_click) {
                    log::debug!("Double-click at ({}, {})", position.x, position.y);
                    events.push(GestureEvent::DoubleClick(event));
                }
                events
            }
            RawPointerEvent::Move { position } => {
                self.pointer_position = position;
                vec![GestureEvent::Move(PointerEvent::new(position))]
            }
        }
    }
}

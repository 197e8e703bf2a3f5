//! Input event types for pointer and wheel input.

use serde::{Deserialize, Serialize};

/// Pointer input events in viewport coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Wheel { delta_y: f32, x: f32, y: f32 },
}

impl PointerEvent {
    /// Viewport position of the event
    pub fn position(&self) -> (f32, f32) {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y }
            | PointerEvent::Wheel { x, y, .. } => (x, y),
        }
    }
}

//! Pointer routing for the gesture state machine
//!
//! Pointer-down selects a mode from the active tool, pointer-move feeds the
//! active operation, pointer-up commits it. All pointer positions arrive in
//! viewport coordinates; compositing happens in buffer space after applying
//! the view transform. Pan deltas stay in viewport space.

use glam::Vec2;
use tracing::debug;

use crate::composite;
use crate::lasso;
use crate::types::Tool;

use super::{EditorSession, Gesture};

impl EditorSession {
    /// Begin a gesture at a viewport position
    ///
    /// Ignored if a gesture is somehow already in flight (a missed pointer-up
    /// from the host); the in-flight gesture keeps the pointer.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.gesture != Gesture::Idle {
            debug!("pointer_down: gesture already in flight, ignoring");
            return;
        }

        let screen = Vec2::new(x, y);
        match self.tool {
            Tool::Pan => {
                self.gesture = Gesture::Panning { last: screen };
            }
            Tool::Erase | Tool::Restore => {
                self.gesture = Gesture::Stroking;
                self.stamper.begin_stroke();
                // Zero-length strokes still stamp once at the down point
                let p = self.view.screen_to_buffer(screen);
                self.apply_stamps(p);
            }
            Tool::Lasso => {
                let p = self.view.screen_to_buffer(screen);
                self.lasso.reset(p);
                self.gesture = Gesture::Lassoing;
            }
        }
    }

    /// Feed the in-flight gesture a new viewport position
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let screen = Vec2::new(x, y);
        match self.gesture {
            Gesture::Idle => {
                debug!("pointer_move: no active gesture, ignoring");
            }
            Gesture::Panning { last } => {
                // Offset moves by the raw viewport delta, unaffected by scale
                self.view.pan_by(screen - last);
                self.gesture = Gesture::Panning { last: screen };
            }
            Gesture::Stroking => {
                let p = self.view.screen_to_buffer(screen);
                self.apply_stamps(p);
            }
            Gesture::Lassoing => {
                let p = self.view.screen_to_buffer(screen);
                self.lasso.push(p);
            }
        }
    }

    /// End the in-flight gesture
    ///
    /// Strokes and lasso selections commit a history snapshot here; pan does
    /// not touch pixels and commits nothing. A lasso with fewer than the
    /// minimum number of points is discarded with no mutation and no commit.
    pub fn pointer_up(&mut self, _x: f32, _y: f32) {
        match self.gesture {
            Gesture::Idle => {
                debug!("pointer_up: no active gesture, ignoring");
                return;
            }
            Gesture::Panning { .. } => {}
            Gesture::Stroking => {
                self.stamper.end_stroke();
                self.commit_history();
            }
            Gesture::Lassoing => {
                if self.lasso.is_committable() {
                    lasso::keep_polygon(self.surface.pixels_mut(), &self.lasso);
                    self.commit_history();
                } else {
                    debug!(
                        "pointer_up: discarding degenerate lasso ({} points)",
                        self.lasso.len()
                    );
                }
                self.lasso.clear();
            }
        }
        self.gesture = Gesture::Idle;
    }

    /// Apply the active brush operation along the stroke to a buffer point
    fn apply_stamps(&mut self, p: Vec2) {
        let size = self.brush_radius;
        let stamps = self.stamper.stroke_to(p.x, p.y, size);
        // The stamped circle has radius brush_radius / 2
        let radius = size / 2.0;

        match self.tool {
            Tool::Erase => {
                for stamp in &stamps {
                    composite::erase_stamp(self.surface.pixels_mut(), stamp.x, stamp.y, radius);
                }
            }
            Tool::Restore => {
                let (pixels, pristine) = self.surface.split_mut();
                for stamp in &stamps {
                    composite::restore_stamp(pixels, pristine, stamp.x, stamp.y, radius);
                }
            }
            Tool::Lasso | Tool::Pan => {
                debug!("apply_stamps: non-brush tool active, ignoring");
            }
        }
    }
}

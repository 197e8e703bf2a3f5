//! Stamp engine for stroke interpolation
//!
//! Converts the pointer path of one gesture into evenly spaced circle stamps.
//! Spacing is a fraction of the brush size, so consecutive stamps always
//! overlap and a moving pointer produces a continuous stroke instead of
//! isolated dots.

use tracing::debug;

use crate::constants::STAMP_SPACING;

/// A single stamp position in buffer coordinates
#[derive(Debug, Clone, Copy)]
pub struct StampOutput {
    /// X position in buffer coordinates
    pub x: f32,
    /// Y position in buffer coordinates
    pub y: f32,
}

/// Stamp engine that interpolates input points
///
/// The engine places stamps along each input segment according to the
/// spacing setting, carrying leftover distance across segments.
pub struct StampEngine {
    /// Last position (None if stroke not started)
    last_pos: Option<(f32, f32)>,
    /// Accumulated distance since last stamp
    distance_accumulator: f32,
}

impl Default for StampEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StampEngine {
    /// Create a new stamp engine
    pub fn new() -> Self {
        Self {
            last_pos: None,
            distance_accumulator: 0.0,
        }
    }

    /// Start a new stroke
    pub fn begin_stroke(&mut self) {
        self.last_pos = None;
        self.distance_accumulator = 0.0;
    }

    /// Process input and generate stamps
    ///
    /// Returns the stamps to apply for this input point. The first point of a
    /// stroke always yields exactly one stamp, so a pointer-down with no
    /// movement still marks the surface.
    pub fn stroke_to(&mut self, x: f32, y: f32, size: f32) -> Vec<StampOutput> {
        let mut stamps = Vec::new();

        // First point in stroke - generate initial stamp
        let Some((last_x, last_y)) = self.last_pos else {
            self.last_pos = Some((x, y));
            self.distance_accumulator = 0.0;

            debug!("StampEngine::stroke_to: FIRST stamp at ({:.1}, {:.1})", x, y);
            stamps.push(StampOutput { x, y });
            return stamps;
        };

        // Calculate distance from last point
        let dx = x - last_x;
        let dy = y - last_y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < 0.001 {
            // No significant movement
            return stamps;
        }

        // Add distance to accumulator
        self.distance_accumulator += distance;

        let spacing_distance = size * STAMP_SPACING;
        if spacing_distance < 0.001 {
            // Prevent infinite loop with zero spacing
            self.last_pos = Some((x, y));
            return stamps;
        }

        // Generate stamps along the path
        let mut current_distance = 0.0;
        let mut stamp_start = spacing_distance - (self.distance_accumulator - distance);

        // If we have accumulated enough distance for a stamp
        if stamp_start < 0.0 {
            stamp_start = 0.0;
        }

        while stamp_start <= distance {
            // Interpolation factor along the segment
            let t = stamp_start / distance;

            stamps.push(StampOutput {
                x: last_x + dx * t,
                y: last_y + dy * t,
            });

            current_distance = stamp_start;
            stamp_start += spacing_distance;
        }

        // Update distance accumulator for next segment
        self.distance_accumulator = distance - current_distance;
        if self.distance_accumulator < 0.0 {
            self.distance_accumulator = 0.0;
        }

        // Update state for next call
        self.last_pos = Some((x, y));

        if !stamps.is_empty() {
            debug!(
                "StampEngine::stroke_to: generated {} stamps along path from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                stamps.len(),
                last_x,
                last_y,
                x,
                y
            );
        }

        stamps
    }

    /// End the current stroke
    pub fn end_stroke(&mut self) {
        self.last_pos = None;
        self.distance_accumulator = 0.0;
    }
}

//! View transform between viewport space and buffer space
//!
//! The mapping is `viewport = buffer * scale + offset`. The inverse is always
//! recomputed from `scale` and `offset`, never accumulated on buffer
//! coordinates, so repeated conversions do not drift.

use glam::Vec2;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};

/// Continuous zoom and pan state for one viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// View scale, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub scale: f32,
    /// Viewport-space position of buffer-space origin
    pub offset: Vec2,
}

impl ViewTransform {
    /// Compute the transform that centers the image in the viewport
    ///
    /// `margin` is subtracted from each viewport edge before fitting. The fit
    /// scale never upsamples past 100%; later wheel zoom may, up to MAX_ZOOM.
    pub fn fit(viewport_w: f32, viewport_h: f32, image_w: f32, image_h: f32, margin: f32) -> Self {
        let avail_w = (viewport_w - margin * 2.0).max(1.0);
        let avail_h = (viewport_h - margin * 2.0).max(1.0);
        let scale = (avail_w / image_w)
            .min(avail_h / image_h)
            .min(1.0)
            .max(MIN_ZOOM);
        let offset = Vec2::new(
            (viewport_w - image_w * scale) / 2.0,
            (viewport_h - image_h * scale) / 2.0,
        );
        Self { scale, offset }
    }

    /// Map a viewport-space point to buffer space
    #[inline]
    pub fn screen_to_buffer(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }

    /// Map a buffer-space point to viewport space
    #[inline]
    pub fn buffer_to_screen(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    /// Apply a wheel zoom step
    ///
    /// Zoom is anchored at buffer origin: the offset is left unchanged rather
    /// than re-centering the buffer point under the cursor.
    pub fn wheel(&mut self, delta_y: f32, step: f32) {
        self.scale = (self.scale - delta_y * step).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Move the view by a viewport-space delta
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_fit_centers_image() {
        // 100x100 image in a 240x240 viewport with a 20px margin:
        // avail = 200, scale capped at 1.0, centered with 70px on each side
        let view = ViewTransform::fit(240.0, 240.0, 100.0, 100.0, 20.0);
        assert!((view.scale - 1.0).abs() < EPSILON);
        assert!((view.offset.x - 70.0).abs() < EPSILON);
        assert!((view.offset.y - 70.0).abs() < EPSILON);
    }

    #[test]
    fn test_fit_downscales_large_image() {
        let view = ViewTransform::fit(240.0, 240.0, 400.0, 800.0, 20.0);
        assert!((view.scale - 0.25).abs() < EPSILON);
        // Narrow axis is centered too: 400 * 0.25 = 100, (240 - 100) / 2 = 70
        assert!((view.offset.x - 70.0).abs() < EPSILON);
        assert!((view.offset.y - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_fit_never_upsamples() {
        let view = ViewTransform::fit(1000.0, 1000.0, 10.0, 10.0, 0.0);
        assert!((view.scale - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_fit_clamps_to_min_zoom() {
        let view = ViewTransform::fit(100.0, 100.0, 10000.0, 10000.0, 0.0);
        assert!((view.scale - MIN_ZOOM).abs() < EPSILON);
    }

    #[test]
    fn test_screen_buffer_roundtrip() {
        for &scale in &[MIN_ZOOM, 0.5, 1.0, 3.0, MAX_ZOOM] {
            let view = ViewTransform {
                scale,
                offset: Vec2::new(-37.5, 140.25),
            };
            let p = Vec2::new(123.4, 56.7);
            let roundtrip = view.screen_to_buffer(view.buffer_to_screen(p));
            assert!((roundtrip - p).length() < 1e-3, "scale {scale}");
        }
    }

    #[test]
    fn test_wheel_clamps_scale() {
        let mut view = ViewTransform {
            scale: 1.0,
            offset: Vec2::ZERO,
        };
        view.wheel(-10000.0, 0.0015);
        assert!((view.scale - MAX_ZOOM).abs() < EPSILON);
        view.wheel(10000.0, 0.0015);
        assert!((view.scale - MIN_ZOOM).abs() < EPSILON);
    }

    #[test]
    fn test_wheel_keeps_offset() {
        let mut view = ViewTransform {
            scale: 1.0,
            offset: Vec2::new(11.0, 22.0),
        };
        view.wheel(-100.0, 0.0015);
        assert_eq!(view.offset, Vec2::new(11.0, 22.0));
    }

    #[test]
    fn test_pan_by_viewport_delta() {
        let mut view = ViewTransform {
            scale: 3.0,
            offset: Vec2::new(5.0, 5.0),
        };
        // Pan delta is in viewport space, unaffected by scale
        view.pan_by(Vec2::new(10.0, 10.0));
        assert_eq!(view.offset, Vec2::new(15.0, 15.0));
    }
}

//! Editing session for one image
//!
//! This module provides the session object that connects:
//! - Input routing (pointer/wheel/resize events from the host shell)
//! - Stamp engine (stroke interpolation)
//! - Compositing operations (erase, restore, lasso commit)
//! - Snapshot history (undo/redo)
//! - Export (PNG encode for the upload collaborator)
//!
//! The session is designed to be driven by a host UI shell but does not
//! depend on any UI framework itself.

mod commands;
mod gesture;
mod undo;

use glam::Vec2;
use image::RgbaImage;
use tracing::{debug, info};

use cutout_config::EditorConfig;

use crate::brush::StampEngine;
use crate::error::{DecodeError, ExportError};
use crate::export;
use crate::history::SnapshotHistory;
use crate::lasso::LassoPath;
use crate::loader;
use crate::surface::MaskSurface;
use crate::types::Tool;
use crate::view::ViewTransform;

/// Gesture currently in flight
///
/// Only one non-idle gesture can exist at a time, which is what makes the
/// working buffer single-writer.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Stroking,
    Lassoing,
    Panning { last: Vec2 },
}

/// Complete mask editing session for one image
///
/// The session owns the working and pristine buffers, the view transform,
/// the active tool, and the undo history. The full workflow:
/// 1. Input comes in via `pointer_down`, `pointer_move`, `pointer_up`
/// 2. The stamp engine interpolates strokes into stamps
/// 3. Stamps (or the lasso commit) mutate the working buffer
/// 4. Pointer-up pushes a history snapshot
/// 5. `save` encodes the working buffer for upload
pub struct EditorSession {
    /// Working and pristine pixel buffers
    surface: MaskSurface,
    /// Viewport-to-buffer mapping
    view: ViewTransform,
    /// Session settings, including current viewport dimensions
    config: EditorConfig,
    /// Active tool
    tool: Tool,
    /// Brush parameter shared by Erase and Restore
    brush_radius: f32,
    /// Stroke interpolator
    stamper: StampEngine,
    /// Path of the in-flight lasso gesture
    lasso: LassoPath,
    /// Gesture state machine
    gesture: Gesture,
    /// Bounded undo/redo snapshots
    history: SnapshotHistory,
}

impl EditorSession {
    /// Create a session from decoded images
    ///
    /// The working buffer starts as the mask when one is supplied, otherwise
    /// as the source; the pristine buffer is always the source. Computes the
    /// initial fit transform and seeds history with one entry.
    pub fn new(source: &RgbaImage, mask: Option<&RgbaImage>, config: EditorConfig) -> Self {
        let surface = MaskSurface::from_source(source, mask);
        let view = ViewTransform::fit(
            config.viewport.width_f32(),
            config.viewport.height_f32(),
            surface.width() as f32,
            surface.height() as f32,
            config.fit_margin,
        );
        let history = SnapshotHistory::new(config.history_capacity, surface.pixels().snapshot());

        info!(
            "EditorSession::new: {}x{} image in {}x{} viewport, initial scale {:.3}",
            surface.width(),
            surface.height(),
            config.viewport.width,
            config.viewport.height,
            view.scale
        );

        Self {
            surface,
            view,
            brush_radius: config.brush_radius,
            config,
            tool: Tool::default(),
            stamper: StampEngine::new(),
            lasso: LassoPath::new(),
            gesture: Gesture::Idle,
            history,
        }
    }

    /// Create a session by decoding raw image bytes
    ///
    /// Fails with a [`DecodeError`] if either image cannot be decoded; no
    /// partially-initialized session is ever produced.
    pub fn from_bytes(
        source_bytes: &[u8],
        mask_bytes: Option<&[u8]>,
        config: EditorConfig,
    ) -> Result<Self, DecodeError> {
        let source = loader::decode_rgba(source_bytes)?;
        let mask = match mask_bytes {
            Some(bytes) => Some(loader::decode_rgba(bytes)?),
            None => None,
        };
        Ok(Self::new(&source, mask.as_ref(), config))
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// The session surface (working and pristine buffers)
    pub fn surface(&self) -> &MaskSurface {
        &self.surface
    }

    /// The current view transform
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The active tool
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The brush radius shared by Erase and Restore
    pub fn brush_radius(&self) -> f32 {
        self.brush_radius
    }

    /// True when no gesture is in flight
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Select a tool
    ///
    /// Rejected while a gesture is in flight; switching tools never mutates
    /// the surface.
    pub fn set_tool(&mut self, tool: Tool) {
        if !self.is_idle() {
            debug!("set_tool: ignoring tool change mid-gesture");
            return;
        }
        self.tool = tool;
    }

    /// Change the brush radius
    ///
    /// Non-positive values are ignored, as are changes mid-gesture.
    pub fn set_brush_radius(&mut self, radius: f32) {
        if radius <= 0.0 {
            debug!("set_brush_radius: ignoring non-positive radius {radius}");
            return;
        }
        if !self.is_idle() {
            debug!("set_brush_radius: ignoring change mid-gesture");
            return;
        }
        self.brush_radius = radius;
    }

    /// Apply a wheel zoom step, anchored at buffer origin
    pub fn wheel(&mut self, delta_y: f32) {
        self.view.wheel(delta_y, self.config.wheel_zoom_step);
    }

    /// Refit the image after a host viewport resize
    ///
    /// Ignored mid-gesture; the host retries once the gesture ends.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        if !self.is_idle() {
            debug!("resize_viewport: ignoring resize mid-gesture");
            return;
        }
        self.config.viewport = cutout_config::ViewportConfig::new(width, height);
        self.view = ViewTransform::fit(
            self.config.viewport.width_f32(),
            self.config.viewport.height_f32(),
            self.surface.width() as f32,
            self.surface.height() as f32,
            self.config.fit_margin,
        );
    }

    /// Encode the working buffer to PNG bytes
    ///
    /// Reflects the buffer exactly at the moment of the call.
    pub fn save(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(self.surface.pixels())
    }

    /// Number of history entries (exposed for the host's history UI)
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the history entry currently displayed
    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_source(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([120, 130, 140, 255]))
    }

    /// 200x200 image centered in a 400x400 viewport at scale 1.0, so buffer
    /// point (x, y) sits at screen point (x + 100, y + 100)
    fn test_session() -> EditorSession {
        EditorSession::new(
            &solid_source(200, 200),
            None,
            EditorConfig::with_viewport(400, 400),
        )
    }

    #[test]
    fn test_initial_state() {
        let session = test_session();
        assert_eq!(session.width(), 200);
        assert_eq!(session.height(), 200);
        assert_eq!(session.tool(), Tool::Erase);
        assert!(session.is_idle());

        // Initial history has exactly one entry, buffer equals source
        assert_eq!(session.history_len(), 1);
        assert_eq!(
            session.surface().pixels().get_pixel(100, 100),
            Some([120, 130, 140, 255])
        );

        // Fit: avail 352x352, scale capped at 1.0, centered
        assert!((session.view().scale - 1.0).abs() < 1e-4);
        assert!((session.view().offset.x - 100.0).abs() < 1e-4);
        assert!((session.view().offset.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_bytes_decode_failure() {
        let result =
            EditorSession::from_bytes(&[1, 2, 3], None, EditorConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_bytes_with_mask() {
        let source = solid_source(8, 8);
        let mut source_bytes = Vec::new();
        source
            .write_to(
                &mut std::io::Cursor::new(&mut source_bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let mask = RgbaImage::from_pixel(8, 8, image::Rgba([120, 130, 140, 0]));
        let mut mask_bytes = Vec::new();
        mask.write_to(
            &mut std::io::Cursor::new(&mut mask_bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let session =
            EditorSession::from_bytes(&source_bytes, Some(&mask_bytes), EditorConfig::default())
                .unwrap();
        // Working buffer shows the mask, pristine keeps the source
        assert_eq!(
            session.surface().pixels().get_pixel(0, 0),
            Some([120, 130, 140, 0])
        );
        assert_eq!(
            session.surface().pristine().get_pixel(0, 0),
            Some([120, 130, 140, 255])
        );
    }

    #[test]
    fn test_set_brush_radius_validation() {
        let mut session = test_session();
        session.set_brush_radius(32.0);
        assert_eq!(session.brush_radius(), 32.0);

        session.set_brush_radius(-5.0);
        assert_eq!(session.brush_radius(), 32.0);
    }

    #[test]
    fn test_resize_refits_when_idle() {
        let mut session = test_session();
        session.resize_viewport(800, 800);
        // avail 752x752, scale still capped at 1.0, re-centered
        assert!((session.view().offset.x - 300.0).abs() < 1e-4);
        assert!((session.view().offset.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_save_is_decodable_png() {
        let session = test_session();
        let bytes = session.save().unwrap();
        let decoded = crate::loader::decode_rgba(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (200, 200));
        assert_eq!(decoded.get_pixel(50, 50).0, [120, 130, 140, 255]);
    }
}

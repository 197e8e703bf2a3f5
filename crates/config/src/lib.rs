//! Shared configuration for the Cutout editor
//!
//! This crate provides the single source of truth for viewport dimensions and
//! editor tuning shared between the host shell and the masking core.

use serde::{Deserialize, Serialize};

/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 960;

/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 640;

/// Default margin in pixels kept between the fitted image and the viewport edge
pub const DEFAULT_FIT_MARGIN: f32 = 24.0;

/// Default zoom change per wheel delta unit
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.0015;

/// Default brush radius in buffer pixels
pub const DEFAULT_BRUSH_RADIUS: f32 = 20.0;

/// Default number of history snapshots kept per session
pub const DEFAULT_HISTORY_CAPACITY: usize = 15;

/// Viewport dimensions reported by the host shell
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport width in logical pixels
    pub width: u32,
    /// Viewport height in logical pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportConfig {
    /// Create a new viewport config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get width as f32 for calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Get height as f32 for calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

/// Editor settings for one masking session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Viewport dimensions at session start
    pub viewport: ViewportConfig,
    /// Margin kept between the fitted image and the viewport edge
    pub fit_margin: f32,
    /// Zoom change per wheel delta unit
    pub wheel_zoom_step: f32,
    /// Initial brush radius in buffer pixels
    pub brush_radius: f32,
    /// Number of history snapshots kept before the oldest is evicted
    pub history_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            fit_margin: DEFAULT_FIT_MARGIN,
            wheel_zoom_step: DEFAULT_WHEEL_ZOOM_STEP,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl EditorConfig {
    /// Create an editor config for the given viewport, keeping default tuning
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            viewport: ViewportConfig::new(width, height),
            ..Default::default()
        }
    }
}

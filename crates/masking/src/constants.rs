/// Minimum view scale the transform will clamp to.
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum view scale the transform will clamp to.
pub const MAX_ZOOM: f32 = 5.0;

/// Stamp spacing along a stroke as a fraction of brush size.
pub const STAMP_SPACING: f32 = 0.25;

/// Fewest lasso points that still form a committable polygon.
pub const MIN_LASSO_POINTS: usize = 3;

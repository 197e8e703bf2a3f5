//! Compositing operations for brush stamps
//!
//! Both operations act on a filled circle in buffer space, clipped to the
//! surface. Erase is destination-out (the pixel is cleared); restore is a
//! clipped copy from the pristine buffer (full RGBA replacement, no blending).
//! Both are idempotent over the same region.

use tracing::debug;

use crate::surface::PixelSurface;

/// Clamped bounding box of a circle stamp, or None if fully outside the surface
fn stamp_bounds(
    surface: &PixelSurface,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> Option<(u32, u32, u32, u32)> {
    if radius <= 0.0 {
        debug!("stamp_bounds: skipped, non-positive radius");
        return None;
    }

    let x_min_f = (center_x - radius).floor();
    let y_min_f = (center_y - radius).floor();
    let x_max_f = (center_x + radius).ceil();
    let y_max_f = (center_y + radius).ceil();

    // Clamp to surface bounds
    let x_min = (x_min_f.max(0.0) as u32).min(surface.width);
    let y_min = (y_min_f.max(0.0) as u32).min(surface.height);
    let x_max = (x_max_f.max(0.0) as u32).min(surface.width);
    let y_max = (y_max_f.max(0.0) as u32).min(surface.height);

    // Check if completely outside
    if x_min >= x_max || y_min >= y_max {
        return None;
    }

    Some((x_min, y_min, x_max, y_max))
}

/// Clear every pixel inside the circle to fully transparent
///
/// Returns the bounding box of the affected region (x, y, width, height),
/// or None if the stamp lies completely outside the surface.
pub fn erase_stamp(
    surface: &mut PixelSurface,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> Option<(u32, u32, u32, u32)> {
    let (x_min, y_min, x_max, y_max) = stamp_bounds(surface, center_x, center_y, radius)?;
    let radius_sq = radius * radius;

    for py in y_min..y_max {
        for px in x_min..x_max {
            // Distance from center, measured at the pixel center
            let dx = (px as f32 + 0.5) - center_x;
            let dy = (py as f32 + 0.5) - center_y;
            if dx * dx + dy * dy <= radius_sq {
                surface.clear_pixel(px, py);
            }
        }
    }

    debug!(
        "erase_stamp: center=({:.1}, {:.1}), radius={:.1} -> affected ({}, {}) {}x{}",
        center_x,
        center_y,
        radius,
        x_min,
        y_min,
        x_max - x_min,
        y_max - y_min
    );
    Some((x_min, y_min, x_max - x_min, y_max - y_min))
}

/// Copy pristine pixels back over every pixel inside the circle
///
/// Full RGBA replacement from the same coordinates of the pristine buffer.
/// Returns the affected bounding box, or None if fully outside the surface.
pub fn restore_stamp(
    surface: &mut PixelSurface,
    pristine: &PixelSurface,
    center_x: f32,
    center_y: f32,
    radius: f32,
) -> Option<(u32, u32, u32, u32)> {
    debug_assert_eq!(surface.width, pristine.width);
    debug_assert_eq!(surface.height, pristine.height);

    let (x_min, y_min, x_max, y_max) = stamp_bounds(surface, center_x, center_y, radius)?;
    let radius_sq = radius * radius;

    for py in y_min..y_max {
        for px in x_min..x_max {
            let dx = (px as f32 + 0.5) - center_x;
            let dy = (py as f32 + 0.5) - center_y;
            if dx * dx + dy * dy <= radius_sq
                && let Some(original) = pristine.get_pixel(px, py)
            {
                surface.set_pixel(px, py, original);
            }
        }
    }

    debug!(
        "restore_stamp: center=({:.1}, {:.1}), radius={:.1} -> affected ({}, {}) {}x{}",
        center_x,
        center_y,
        radius,
        x_min,
        y_min,
        x_max - x_min,
        y_max - y_min
    );
    Some((x_min, y_min, x_max - x_min, y_max - y_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_surface(width: u32, height: u32, color: [u8; 4]) -> PixelSurface {
        let mut surface = PixelSurface::new(width, height);
        for y in 0..height {
            for x in 0..width {
                surface.set_pixel(x, y, color);
            }
        }
        surface
    }

    #[test]
    fn test_erase_clears_circle() {
        let mut surface = opaque_surface(40, 40, [200, 150, 100, 255]);

        let bbox = erase_stamp(&mut surface, 20.0, 20.0, 10.0);
        assert_eq!(bbox, Some((10, 10, 20, 20)));

        // Center cleared, corner untouched
        assert_eq!(surface.get_pixel(20, 20), Some([0, 0, 0, 0]));
        assert_eq!(surface.get_pixel(0, 0), Some([200, 150, 100, 255]));
        // Pixel just outside the radius is untouched
        assert_eq!(surface.get_pixel(20, 31), Some([200, 150, 100, 255]));
    }

    #[test]
    fn test_erase_is_idempotent() {
        let mut surface = opaque_surface(20, 20, [50, 50, 50, 255]);
        erase_stamp(&mut surface, 10.0, 10.0, 5.0);
        let after_first = surface.snapshot();
        erase_stamp(&mut surface, 10.0, 10.0, 5.0);
        assert_eq!(surface.pixels(), &after_first[..]);
    }

    #[test]
    fn test_erase_clips_to_bounds() {
        let mut surface = opaque_surface(10, 10, [1, 2, 3, 255]);

        // Stamp hanging off the top-left corner
        let bbox = erase_stamp(&mut surface, 0.0, 0.0, 4.0);
        assert_eq!(bbox, Some((0, 0, 4, 4)));
        assert_eq!(surface.get_pixel(0, 0), Some([0, 0, 0, 0]));

        // Stamp fully outside the surface is a no-op
        assert_eq!(erase_stamp(&mut surface, -100.0, -100.0, 4.0), None);
    }

    #[test]
    fn test_restore_returns_pristine_bits() {
        let pristine = opaque_surface(40, 40, [200, 150, 100, 255]);
        let mut surface = opaque_surface(40, 40, [200, 150, 100, 255]);

        erase_stamp(&mut surface, 20.0, 20.0, 10.0);
        restore_stamp(&mut surface, &pristine, 20.0, 20.0, 10.0);

        // Erasing then restoring the exact same region is bit-identical
        assert_eq!(surface.pixels(), pristine.pixels());
    }

    #[test]
    fn test_restore_replaces_not_blends() {
        let pristine = opaque_surface(10, 10, [100, 100, 100, 255]);
        let mut surface = opaque_surface(10, 10, [0, 0, 0, 128]);

        restore_stamp(&mut surface, &pristine, 5.0, 5.0, 2.0);

        // Full RGBA replacement, no blending with the previous value
        assert_eq!(surface.get_pixel(5, 5), Some([100, 100, 100, 255]));
    }

    #[test]
    fn test_zero_radius_is_no_op() {
        let mut surface = opaque_surface(10, 10, [9, 9, 9, 255]);
        assert_eq!(erase_stamp(&mut surface, 5.0, 5.0, 0.0), None);
        assert_eq!(surface.get_pixel(5, 5), Some([9, 9, 9, 255]));
    }
}

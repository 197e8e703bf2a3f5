//! CPU surfaces for mask editing - 8-bit straight-alpha RGBA storage

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// An 8-bit RGBA CPU surface
/// Stores pixels as [u8; 4] (straight alpha, row-major)
pub struct PixelSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a]
    pixels: Vec<[u8; 4]>,
}

impl PixelSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; pixel_count],
        }
    }

    /// Create a surface holding a copy of a decoded image's pixels
    pub fn from_image(image: &RgbaImage) -> Self {
        let pixels = image
            .as_raw()
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Clear a pixel to fully transparent (destination-out at full strength)
    #[inline]
    pub fn clear_pixel(&mut self, x: u32, y: u32) {
        self.set_pixel(x, y, [0, 0, 0, 0]);
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Get mutable access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }

    /// Get raw pixel data as bytes for encoding or texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy out the full pixel buffer (history snapshot)
    pub fn snapshot(&self) -> Vec<[u8; 4]> {
        self.pixels.clone()
    }

    /// Overwrite the full pixel buffer from a snapshot of equal length
    pub fn restore(&mut self, snapshot: &[[u8; 4]]) {
        debug_assert_eq!(snapshot.len(), self.pixels.len());
        self.pixels.copy_from_slice(snapshot);
    }
}

/// The editable surface of one masking session
///
/// Pairs the working pixel buffer with the immutable pristine copy of the
/// source image. Both buffers always have identical dimensions; the pristine
/// buffer is never written after construction.
pub struct MaskSurface {
    pixels: PixelSurface,
    pristine: PixelSurface,
}

impl MaskSurface {
    /// Build the session surface from a decoded source image and an optional
    /// previously computed mask image
    ///
    /// The working buffer starts as the mask when one is supplied (resampled
    /// to the source's native resolution if dimensions differ), otherwise as
    /// the unmodified source. The pristine buffer is always the source.
    pub fn from_source(source: &RgbaImage, mask: Option<&RgbaImage>) -> Self {
        let pristine = PixelSurface::from_image(source);
        let pixels = match mask {
            Some(mask) if mask.dimensions() == source.dimensions() => {
                PixelSurface::from_image(mask)
            }
            Some(mask) => {
                debug!(
                    "MaskSurface::from_source: resampling {}x{} mask to {}x{}",
                    mask.width(),
                    mask.height(),
                    source.width(),
                    source.height()
                );
                let resampled =
                    imageops::resize(mask, source.width(), source.height(), FilterType::Triangle);
                PixelSurface::from_image(&resampled)
            }
            None => PixelSurface::from_image(source),
        };
        Self { pixels, pristine }
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    /// The working pixel buffer
    pub fn pixels(&self) -> &PixelSurface {
        &self.pixels
    }

    /// Mutable access to the working pixel buffer
    pub fn pixels_mut(&mut self) -> &mut PixelSurface {
        &mut self.pixels
    }

    /// The pristine source pixels (read-only by construction)
    pub fn pristine(&self) -> &PixelSurface {
        &self.pristine
    }

    /// Borrow the working buffer mutably together with the pristine buffer
    pub fn split_mut(&mut self) -> (&mut PixelSurface, &PixelSurface) {
        (&mut self.pixels, &self.pristine)
    }
}

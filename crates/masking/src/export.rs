//! PNG export of the working buffer
//!
//! PNG keeps the export lossless and alpha-preserving; the byte artifact is
//! handed to the upload collaborator unchanged.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;

use crate::error::ExportError;
use crate::surface::PixelSurface;

/// Encode the surface to PNG bytes, exactly as it is at the moment of the call
pub fn encode_png(surface: &PixelSurface) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder.write_image(
        surface.as_bytes(),
        surface.width,
        surface.height,
        ExtendedColorType::Rgba8,
    )?;
    info!(
        "encode_png: {}x{} surface -> {} bytes",
        surface.width,
        surface.height,
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::decode_rgba;

    #[test]
    fn test_export_preserves_alpha_exactly() {
        let mut surface = PixelSurface::new(4, 4);
        surface.set_pixel(0, 0, [255, 0, 0, 255]);
        surface.set_pixel(1, 0, [0, 255, 0, 128]);
        surface.set_pixel(2, 0, [0, 0, 255, 0]);

        let bytes = encode_png(&surface).unwrap();
        let decoded = decode_rgba(&bytes).unwrap();

        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 128]);
        assert_eq!(decoded.get_pixel(2, 0).0, [0, 0, 255, 0]);
    }
}

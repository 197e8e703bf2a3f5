//! Image decode boundary
//!
//! The host collaborator fetches image URIs; this module owns turning the
//! fetched bytes into fixed-size RGBA buffers and the failure taxonomy for
//! content that is not a supported raster format.

use image::RgbaImage;
use tracing::{debug, info};

use crate::error::DecodeError;

/// Decode raw image bytes into an RGBA buffer
///
/// Accepts any raster format the image crate recognizes and converts to
/// straight-alpha RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    debug!("decode_rgba: decoding {} bytes", bytes.len());
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }
    info!("decode_rgba: {}x{} image", rgba.width(), rgba.height());
    Ok(rgba)
}

//! Error types for the masking core.

use thiserror::Error;

/// Errors raised while decoding a source or mask image.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has zero width or height")]
    EmptyImage,
}

/// Errors raised while encoding the working buffer for export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

//! Decoding uploaded garment photos.
//!
//! The pipeline itself is codec-agnostic; this module is the collaborator
//! that turns an uploaded JPEG or PNG byte stream into a [`PixelBuffer`].
//! Images without an alpha channel are promoted to RGBA with full opacity.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur while decoding an upload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode an image from raw file bytes.
///
/// The container format (JPEG or PNG) is guessed from the bytes themselves,
/// so the caller doesn't need to trust the uploaded filename.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image, or `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(PixelBuffer::from_rgba_image(img.into_rgba8()))
}

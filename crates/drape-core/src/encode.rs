//! Encoding processed images for display and download.
//!
//! PNG keeps the alpha plane, so it is the format for keyed (transparent
//! backdrop) outputs. JPEG has no alpha; the buffer is demoted to RGB
//! first, which flattens transparency to whatever color the pixels carry.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

fn validate(image: &PixelBuffer) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }
    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

/// Encode a buffer to PNG bytes, preserving transparency.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a buffer to JPEG bytes, dropping the alpha plane.
///
/// # Arguments
///
/// * `image` - Source buffer
/// * `quality` - JPEG quality, clamped to 1-100
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let quality = quality.clamp(1, 100);
    let rgb = image.to_rgb();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

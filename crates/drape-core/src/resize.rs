//! RGBA resampling built on the `image` crate's algorithms.
//!
//! Used by the slider compositor to reconcile mismatched dimensions and by
//! the host application for preview sizing. All functions return new
//! `PixelBuffer` instances without modifying the input.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `PipelineError::InvalidDimensions` if either target dimension is
/// zero, and the usual errors for malformed input buffers.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, PipelineError> {
    image.check()?;
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba = image
        .to_rgba_image()
        .ok_or(PipelineError::InvalidPixelData {
            expected: (image.width as usize) * (image.height as usize) * 4,
            actual: image.pixels.len(),
        })?;

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    Ok(PixelBuffer::from_rgba_image(resized))
}

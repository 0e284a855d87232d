//! Error types shared by the processing pipeline.

use thiserror::Error;

/// Errors reported by pipeline stages.
///
/// Every stage validates its inputs before touching any pixels, so a failed
/// call never produces partial output. The core does no logging or user
/// messaging; the surrounding application translates these into whatever
/// its UI needs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length doesn't match the stated dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Pixel access outside the raster.
    #[error("Pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Out-of-range configuration value (slider split beyond the image
    /// width, negative or non-finite enhancement factor).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

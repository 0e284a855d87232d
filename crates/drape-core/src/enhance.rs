//! Color enhancement: uniform saturation scaling.
//!
//! Each pixel's R, G and B are interpolated between its luminance (the fully
//! desaturated value) and the original color, pushed outward by the
//! enhancement factor:
//!
//! `channel' = clamp(Y + (channel - Y) * factor, 0, 255)`
//!
//! Factor 1.0 is the identity, 0.0 collapses to grayscale, and the default
//! 1.5 pushes colors 50% further from gray. Alpha is never touched.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::luminance::luminance;

/// Default enhancement factor applied by the preview pipeline.
pub const DEFAULT_ENHANCEMENT: f32 = 1.5;

/// Scale color saturation by `factor`.
///
/// # Arguments
/// * `image` - Source image (RGBA)
/// * `factor` - Saturation scale; 0.0 = grayscale, 1.0 = identity
///
/// # Errors
///
/// Returns `PipelineError::InvalidParameter` if `factor` is negative or not
/// finite, and the usual dimension errors for malformed buffers.
pub fn enhance_color(image: &PixelBuffer, factor: f32) -> Result<PixelBuffer, PipelineError> {
    image.check()?;
    if !factor.is_finite() || factor < 0.0 {
        return Err(PipelineError::InvalidParameter(format!(
            "enhancement factor must be finite and non-negative, got {factor}"
        )));
    }

    // Identity: return an exact copy rather than round-tripping through
    // floats.
    if factor == 1.0 {
        return Ok(image.clone());
    }

    let mut pixels = Vec::with_capacity(image.byte_size());
    for chunk in image.pixels.chunks_exact(4) {
        let y = luminance(chunk[0], chunk[1], chunk[2]);
        for &c in &chunk[..3] {
            let scaled = y + (c as f32 - y) * factor;
            pixels.push(scaled.clamp(0.0, 255.0).round() as u8);
        }
        pixels.push(chunk[3]);
    }

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

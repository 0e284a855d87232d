//! Pseudo depth map synthesis.
//!
//! This is a stylistic approximation, not real depth estimation: the image
//! is reduced to its BT.601 luminance and smoothed with a Gaussian blur, so
//! bright raised areas of the garment read as "near" and shadowed folds as
//! "far" in the preview shader.
//!
//! The blur is separable (one horizontal pass, one vertical pass) over an
//! f32 plane; quantization back to u8 happens once at the end. Borders use
//! replicate extension via index clamping, never wraparound.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::luminance::luminance;

/// Default Gaussian blur radius for depth synthesis.
pub const DEFAULT_BLUR_RADIUS: u32 = 5;

/// Derive a depth map from an image.
///
/// # Arguments
/// * `image` - Source image (RGBA)
/// * `radius` - Blur window half-width in pixels; 0 skips the blur
///
/// # Returns
///
/// A grayscale-in-RGBA buffer of the same dimensions (`R = G = B = depth`,
/// `A = 255`).
///
/// # Errors
///
/// Returns the usual dimension errors for malformed buffers.
pub fn synthesize_depth(image: &PixelBuffer, radius: u32) -> Result<PixelBuffer, PipelineError> {
    image.check()?;

    let width = image.width as usize;
    let height = image.height as usize;

    let mut plane: Vec<f32> = image
        .pixels
        .chunks_exact(4)
        .map(|chunk| luminance(chunk[0], chunk[1], chunk[2]))
        .collect();

    if radius > 0 {
        let kernel = gaussian_kernel(radius);
        plane = blur_rows(&plane, width, height, &kernel);
        plane = blur_columns(&plane, width, height, &kernel);
    }

    let mut pixels = Vec::with_capacity(image.byte_size());
    for v in plane {
        let d = v.clamp(0.0, 255.0).round() as u8;
        pixels.extend_from_slice(&[d, d, d, 255]);
    }

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}

/// Build a normalized 1-D Gaussian kernel of half-width `radius`.
///
/// The standard deviation is `radius / 2`, so the window covers two sigmas
/// on each side.
fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let sigma = radius as f32 / 2.0;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-(radius as i64)..=radius as i64)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Horizontal blur pass. Reads one plane, writes a new one; out-of-range
/// taps clamp to the row's edge pixels.
fn blur_rows(plane: &[f32], width: usize, height: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = (kernel.len() / 2) as i64;
    let mut out = vec![0.0f32; plane.len()];

    for y in 0..height {
        let row = &plane[y * width..(y + 1) * width];
        for x in 0..width {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let sx = (x as i64 + k as i64 - radius).clamp(0, width as i64 - 1);
                acc += row[sx as usize] * w;
            }
            out[y * width + x] = acc;
        }
    }
    out
}

/// Vertical blur pass, same boundary handling as [`blur_rows`].
fn blur_columns(plane: &[f32], width: usize, height: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = (kernel.len() / 2) as i64;
    let mut out = vec![0.0f32; plane.len()];

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let sy = (y as i64 + k as i64 - radius).clamp(0, height as i64 - 1);
                acc += plane[sy as usize * width + x] * w;
            }
            out[y * width + x] = acc;
        }
    }
    out
}

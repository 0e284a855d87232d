//! Artificial "3D" illusion layer.
//!
//! Two fixed 3x3 convolutions are computed from the input and blended with
//! equal weight:
//!
//! - **emboss** (`[-1 0 0; 0 1 0; 0 0 0]`, offset +128) produces relief
//!   shading along the top-left diagonal;
//! - **edge-detect** (`[-1 -1 -1; -1 8 -1; -1 -1 -1]`, offset 0) highlights
//!   garment outlines.
//!
//! Both filters use replicate-edge boundary handling and run over all four
//! channels, alpha included; each filter output is quantized to u8 before
//! the blend, mirroring how the reference renderer stacks its filter layers.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;

/// Relief-shading kernel, applied with a +128 offset.
const EMBOSS_KERNEL: [[f32; 3]; 3] = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

/// Gradient-magnitude kernel highlighting outlines.
const EDGE_KERNEL: [[f32; 3]; 3] = [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]];

/// Synthesize the 3D illusion layer for an image.
///
/// # Returns
///
/// A new `PixelBuffer` of the same dimensions where each channel is
/// `clamp(emboss * 0.5 + edges * 0.5, 0, 255)`.
///
/// # Errors
///
/// Returns the usual dimension errors for malformed buffers.
pub fn synthesize_3d_effect(image: &PixelBuffer) -> Result<PixelBuffer, PipelineError> {
    image.check()?;

    let embossed = convolve_3x3(image, &EMBOSS_KERNEL, 128.0);
    let edges = convolve_3x3(image, &EDGE_KERNEL, 0.0);

    let pixels = embossed
        .iter()
        .zip(edges.iter())
        .map(|(&e, &d)| ((e as f32 * 0.5 + d as f32 * 0.5).clamp(0.0, 255.0)).round() as u8)
        .collect();

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}

/// Apply a 3x3 kernel plus offset to every channel of the image.
///
/// Out-of-range taps clamp to the nearest edge pixel. The result is
/// quantized to u8 per channel.
fn convolve_3x3(image: &PixelBuffer, kernel: &[[f32; 3]; 3], offset: f32) -> Vec<u8> {
    let width = image.width as i64;
    let height = image.height as i64;
    let mut out = Vec::with_capacity(image.byte_size());

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 4];
            for (ky, row) in kernel.iter().enumerate() {
                let sy = (y + ky as i64 - 1).clamp(0, height - 1);
                for (kx, &w) in row.iter().enumerate() {
                    let sx = (x + kx as i64 - 1).clamp(0, width - 1);
                    let i = ((sy * width + sx) * 4) as usize;
                    for c in 0..4 {
                        acc[c] += image.pixels[i + c] as f32 * w;
                    }
                }
            }
            for a in acc {
                out.push((a + offset).clamp(0.0, 255.0).round() as u8);
            }
        }
    }
    out
}

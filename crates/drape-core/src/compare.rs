//! Before/after comparison for the interactive slider.
//!
//! Builds a single image from two inputs and a vertical split position: the
//! slider reveals the processed ("after") image over `[0, split_x)` and the
//! original ("before") image everywhere else, so dragging the handle right
//! wipes the processed version across the preview. `before`'s dimensions are
//! authoritative; `after` is bilinearly resampled to match when the sizes
//! differ.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::resize::{resize, FilterType};

/// Compose a before/after comparison image.
///
/// # Arguments
/// * `before` - Base image; defines the output dimensions
/// * `after` - Image revealed left of the split; resampled to `before`'s
///   size if needed
/// * `split_x` - Split column in `0..=before.width`
///
/// # Edge behavior
///
/// `split_x == 0` returns `before` exactly; `split_x == width` returns the
/// (possibly resampled) `after` exactly.
///
/// # Errors
///
/// Returns `PipelineError::InvalidParameter` if `split_x` exceeds
/// `before`'s width, and the usual dimension errors for malformed buffers.
pub fn compare_slider(
    before: &PixelBuffer,
    after: &PixelBuffer,
    split_x: u32,
) -> Result<PixelBuffer, PipelineError> {
    before.check()?;
    after.check()?;

    if split_x > before.width {
        return Err(PipelineError::InvalidParameter(format!(
            "split_x ({split_x}) must be within 0..={}",
            before.width
        )));
    }

    let after = if after.width == before.width && after.height == before.height {
        after.clone()
    } else {
        resize(after, before.width, before.height, FilterType::Bilinear)?
    };

    let row_bytes = before.width as usize * 4;
    let split_bytes = split_x as usize * 4;
    let mut pixels = Vec::with_capacity(before.byte_size());

    for y in 0..before.height as usize {
        let start = y * row_bytes;
        pixels.extend_from_slice(&after.pixels[start..start + split_bytes]);
        pixels.extend_from_slice(&before.pixels[start + split_bytes..start + row_bytes]);
    }

    Ok(PixelBuffer {
        width: before.width,
        height: before.height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let pixels: Vec<u8> = rgba
            .iter()
            .cycle()
            .take((width * height * 4) as usize)
            .copied()
            .collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn test_split_zero_is_pure_before() {
        let before = solid(10, 10, RED);
        let after = solid(10, 10, BLUE);
        let result = compare_slider(&before, &after, 0).unwrap();
        assert_eq!(result, before);
    }

    #[test]
    fn test_split_width_is_pure_after() {
        let before = solid(10, 10, RED);
        let after = solid(10, 10, BLUE);
        let result = compare_slider(&before, &after, 10).unwrap();
        assert_eq!(result, after);
    }

    #[test]
    fn test_split_middle() {
        let before = solid(10, 10, RED);
        let after = solid(10, 10, BLUE);
        let result = compare_slider(&before, &after, 5).unwrap();

        for y in 0..10 {
            for x in 0..10 {
                let expected = if x < 5 { BLUE } else { RED };
                assert_eq!(
                    result.get(x, y).unwrap(),
                    expected,
                    "wrong side at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_split_beyond_width_rejected() {
        let before = solid(10, 10, RED);
        let after = solid(10, 10, BLUE);
        assert!(matches!(
            compare_slider(&before, &after, 11),
            Err(PipelineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_mismatched_after_resampled_to_before() {
        let before = solid(10, 10, RED);
        let after = solid(4, 7, BLUE);
        let result = compare_slider(&before, &after, 5).unwrap();

        assert_eq!((result.width, result.height), (10, 10));
        // Solid blue survives resampling exactly
        assert_eq!(result.get(2, 3).unwrap(), BLUE);
        assert_eq!(result.get(7, 3).unwrap(), RED);
    }

    #[test]
    fn test_output_matches_before_dimensions() {
        let before = solid(12, 5, RED);
        let after = solid(30, 40, BLUE);
        let result = compare_slider(&before, &after, 6).unwrap();
        assert_eq!((result.width, result.height), (12, 5));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let before = solid(6, 6, RED);
        let after = solid(6, 6, BLUE);
        let before_copy = before.clone();
        let after_copy = after.clone();
        compare_slider(&before, &after, 3).unwrap();
        assert_eq!(before, before_copy);
        assert_eq!(after, after_copy);
    }

    #[test]
    fn test_malformed_before_rejected() {
        let bad = PixelBuffer {
            width: 5,
            height: 5,
            pixels: vec![0u8; 3],
        };
        let after = solid(5, 5, BLUE);
        assert!(compare_slider(&bad, &after, 2).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

//! White background removal for garment photos.
//!
//! Product shots come in on a studio-white backdrop; this stage keys those
//! pixels out so the garment can be composited onto the preview scene.
//!
//! ## Algorithm
//!
//! A pixel is background when all three of R, G and B are strictly above the
//! threshold. Matched pixels become fully transparent black; everything else
//! passes through byte-for-byte, including its original alpha.
//!
//! ## Known limitation
//!
//! This is a hard per-pixel threshold with no connectivity analysis, so
//! genuinely white regions inside the garment (white fabric, highlights) are
//! keyed out as well. That matches the product behavior; do not "fix" it
//! here with flood fill or segmentation.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;

/// Default channel threshold above which a pixel counts as background.
pub const WHITE_THRESHOLD: u8 = 240;

/// Make near-white pixels transparent.
///
/// # Arguments
/// * `image` - Source image (RGBA)
/// * `threshold` - Channel threshold; a pixel is background when R, G and B
///   are all strictly greater than this value
///
/// # Returns
///
/// A new `PixelBuffer` of the same dimensions. Background pixels are
/// `(0, 0, 0, 0)`; all others are unchanged.
///
/// # Errors
///
/// Returns `PipelineError::InvalidDimensions` or
/// `PipelineError::InvalidPixelData` if the input buffer is malformed.
pub fn key_background(image: &PixelBuffer, threshold: u8) -> Result<PixelBuffer, PipelineError> {
    image.check()?;

    let mut pixels = Vec::with_capacity(image.byte_size());
    for chunk in image.pixels.chunks_exact(4) {
        let (r, g, b) = (chunk[0], chunk[1], chunk[2]);
        if r > threshold && g > threshold && b > threshold {
            pixels.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            pixels.extend_from_slice(chunk);
        }
    }

    Ok(PixelBuffer {
        width: image.width,
        height: image.height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(rgba: [u8; 4]) -> PixelBuffer {
        PixelBuffer::new(1, 1, rgba.to_vec()).unwrap()
    }

    #[test]
    fn test_white_pixel_keyed_out() {
        let img = single_pixel([255, 255, 255, 255]);
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.pixels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 240 is not > 240, so the pixel stays
        let img = single_pixel([240, 240, 240, 255]);
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.pixels, vec![240, 240, 240, 255]);
    }

    #[test]
    fn test_one_channel_below_threshold_kept() {
        let img = single_pixel([255, 255, 240, 255]);
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.pixels, vec![255, 255, 240, 255]);
    }

    #[test]
    fn test_foreground_alpha_preserved() {
        let img = single_pixel([100, 150, 200, 180]);
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.pixels, vec![100, 150, 200, 180]);
    }

    #[test]
    fn test_keying_is_idempotent() {
        let pixels = vec![
            255, 255, 255, 255, // background
            240, 240, 240, 255, // just under threshold
            100, 150, 200, 180, // garment
            250, 250, 250, 0, // near-white but already transparent
        ];
        let img = PixelBuffer::new(4, 1, pixels).unwrap();
        let once = key_background(&img, WHITE_THRESHOLD).unwrap();
        let twice = key_background(&once, WHITE_THRESHOLD).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_threshold() {
        let img = single_pixel([210, 210, 210, 255]);
        let keyed = key_background(&img, 200).unwrap();
        assert_eq!(keyed.pixels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = PixelBuffer::new(7, 3, vec![128u8; 7 * 3 * 4]).unwrap();
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.width, 7);
        assert_eq!(keyed.height, 3);
    }

    #[test]
    fn test_malformed_input_rejected() {
        let bad = PixelBuffer {
            width: 2,
            height: 2,
            pixels: vec![0u8; 7],
        };
        assert!(key_background(&bad, WHITE_THRESHOLD).is_err());
    }

    #[test]
    fn test_isolated_white_pixel_inside_subject_also_keyed() {
        // Documented limitation: no connectivity analysis, so a white pixel
        // surrounded by garment is removed too.
        let pixels = vec![
            50, 50, 50, 255, 50, 50, 50, 255, 50, 50, 50, 255, //
            50, 50, 50, 255, 255, 255, 255, 255, 50, 50, 50, 255, //
            50, 50, 50, 255, 50, 50, 50, 255, 50, 50, 50, 255,
        ];
        let img = PixelBuffer::new(3, 3, pixels).unwrap();
        let keyed = key_background(&img, WHITE_THRESHOLD).unwrap();
        assert_eq!(keyed.get(1, 1).unwrap(), [0, 0, 0, 0]);
        assert_eq!(keyed.get(0, 0).unwrap(), [50, 50, 50, 255]);
    }
}

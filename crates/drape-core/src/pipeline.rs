//! The canonical 2D-to-3D preview pipeline.
//!
//! One deterministic call turns a flat garment photo into the three images
//! the preview UI needs, in a fixed order:
//!
//! 1. Key out the white backdrop
//! 2. Enhance color saturation
//! 3. Synthesize the depth map from the enhanced image
//! 4. Synthesize the 3D effect layer from the enhanced image
//!
//! Every stage allocates a fresh buffer, so the three outputs share no
//! state and independent invocations are safe to run concurrently.

use crate::buffer::PixelBuffer;
use crate::depth::synthesize_depth;
use crate::effect::synthesize_3d_effect;
use crate::enhance::enhance_color;
use crate::error::PipelineError;
use crate::keying::key_background;
use crate::PipelineOptions;

/// The three images produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Input with the white backdrop keyed to transparency.
    pub cleaned: PixelBuffer,
    /// Blurred-luminance depth map of the enhanced image.
    pub depth: PixelBuffer,
    /// Emboss/edge blend giving the 3D illusion.
    pub final_3d: PixelBuffer,
}

/// Run the full preview pipeline on one image.
///
/// # Errors
///
/// Fails before producing any output if the input buffer is malformed or
/// an option is out of range; never returns a partial triple.
pub fn run_pipeline(
    image: &PixelBuffer,
    options: &PipelineOptions,
) -> Result<PipelineOutput, PipelineError> {
    let cleaned = key_background(image, options.white_threshold)?;
    let enhanced = enhance_color(&cleaned, options.enhancement)?;
    let depth = synthesize_depth(&enhanced, options.blur_radius)?;
    let final_3d = synthesize_3d_effect(&enhanced)?;

    Ok(PipelineOutput {
        cleaned,
        depth,
        final_3d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small garment-like test image: dark shirt shape on a white
    /// backdrop.
    fn shirt_on_white(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let inside = x > width / 4 && x < 3 * width / 4 && y > height / 4;
                if inside {
                    pixels.extend_from_slice(&[60, 80, (120 + (x % 40)) as u8, 255]);
                } else {
                    pixels.extend_from_slice(&[255, 255, 255, 255]);
                }
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_pipeline_produces_triple_of_same_dimensions() {
        let img = shirt_on_white(20, 16);
        let out = run_pipeline(&img, &PipelineOptions::default()).unwrap();
        for buf in [&out.cleaned, &out.depth, &out.final_3d] {
            assert_eq!((buf.width, buf.height), (20, 16));
        }
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let img = shirt_on_white(24, 24);
        let opts = PipelineOptions::default();
        let a = run_pipeline(&img, &opts).unwrap();
        let b = run_pipeline(&img, &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pipeline_does_not_mutate_input() {
        let img = shirt_on_white(12, 12);
        let copy = img.clone();
        run_pipeline(&img, &PipelineOptions::default()).unwrap();
        assert_eq!(img, copy);
    }

    #[test]
    fn test_cleaned_has_transparent_backdrop() {
        let img = shirt_on_white(16, 16);
        let out = run_pipeline(&img, &PipelineOptions::default()).unwrap();
        // Top-left corner is backdrop
        assert_eq!(out.cleaned.get(0, 0).unwrap(), [0, 0, 0, 0]);
        // Center is garment, still opaque
        assert_eq!(out.cleaned.get(8, 10).unwrap()[3], 255);
    }

    #[test]
    fn test_depth_output_is_grayscale() {
        let img = shirt_on_white(16, 16);
        let out = run_pipeline(&img, &PipelineOptions::default()).unwrap();
        for chunk in out.depth.pixels.chunks_exact(4) {
            assert_eq!(chunk[0], chunk[1]);
            assert_eq!(chunk[1], chunk[2]);
        }
    }

    #[test]
    fn test_pipeline_rejects_bad_options() {
        let img = shirt_on_white(8, 8);
        let mut opts = PipelineOptions::default();
        opts.enhancement = -2.0;
        assert!(matches!(
            run_pipeline(&img, &opts),
            Err(PipelineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pipeline_rejects_malformed_input() {
        let bad = PixelBuffer {
            width: 4,
            height: 4,
            pixels: vec![0u8; 10],
        };
        assert!(run_pipeline(&bad, &PipelineOptions::default()).is_err());
    }

    #[test]
    fn test_custom_options_change_output() {
        let img = shirt_on_white(16, 16);
        let defaults = run_pipeline(&img, &PipelineOptions::default()).unwrap();

        let mut opts = PipelineOptions::default();
        opts.enhancement = 3.0;
        opts.blur_radius = 1;
        let custom = run_pipeline(&img, &opts).unwrap();

        assert_ne!(defaults.depth, custom.depth);
    }
}

//! Drape Core - 2D-to-3D garment preview processing
//!
//! This crate turns a flat garment photo into the images a virtual try-on
//! preview needs: background keying, color enhancement, pseudo depth map
//! synthesis, an emboss/edge "3D" effect layer, and a before/after slider
//! composite. All operations are pure functions over an RGBA pixel buffer;
//! decoding and encoding byte streams live at the edges in [`decode`] and
//! [`encode`].

pub mod buffer;
pub mod compare;
pub mod decode;
pub mod depth;
pub mod effect;
pub mod encode;
pub mod enhance;
pub mod error;
pub mod keying;
pub mod luminance;
pub mod pipeline;
pub mod resize;

pub use buffer::{Channel, PixelBuffer};
pub use compare::compare_slider;
pub use depth::{synthesize_depth, DEFAULT_BLUR_RADIUS};
pub use effect::synthesize_3d_effect;
pub use enhance::{enhance_color, DEFAULT_ENHANCEMENT};
pub use error::PipelineError;
pub use keying::{key_background, WHITE_THRESHOLD};
pub use pipeline::{run_pipeline, PipelineOutput};
pub use resize::{resize, FilterType};

/// Tunable parameters for the preview pipeline.
///
/// The defaults reproduce the canonical product behavior; they exist as
/// named parameters so the pipeline stays pure and testable without hidden
/// constants.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineOptions {
    /// Channel threshold for background keying (strict `>` comparison).
    pub white_threshold: u8,
    /// Saturation scale; 1.0 is identity, 1.5 the product default.
    pub enhancement: f32,
    /// Gaussian blur radius for depth synthesis.
    pub blur_radius: u32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            white_threshold: WHITE_THRESHOLD,
            enhancement: DEFAULT_ENHANCEMENT,
            blur_radius: DEFAULT_BLUR_RADIUS,
        }
    }
}

impl PipelineOptions {
    /// Create options with the canonical defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

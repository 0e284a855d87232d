//! WASM bindings for the preview pipeline stages.
//!
//! Each binding validates its input image, runs the corresponding core
//! stage, and surfaces any `PipelineError` to JavaScript as an error
//! string.

use crate::types::JsPixelImage;
use drape_core::{
    compare_slider as core_compare, enhance_color as core_enhance,
    key_background as core_key, run_pipeline as core_pipeline,
    synthesize_3d_effect as core_effect, synthesize_depth as core_depth, PipelineOptions,
};
use wasm_bindgen::prelude::*;

fn to_js_err(e: drape_core::PipelineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Make near-white backdrop pixels transparent.
///
/// # Arguments
///
/// * `image` - Source image
/// * `threshold` - Channel threshold; pixels with R, G and B all strictly
///   above it are keyed out (the product default is 240)
#[wasm_bindgen]
pub fn key_background(image: &JsPixelImage, threshold: u8) -> Result<JsPixelImage, JsValue> {
    let src = image.to_core()?;
    let result = core_key(&src, threshold).map_err(to_js_err)?;
    Ok(JsPixelImage::from_core(result))
}

/// Scale color saturation by `factor` (1.0 = identity, 1.5 = default).
#[wasm_bindgen]
pub fn enhance_color(image: &JsPixelImage, factor: f32) -> Result<JsPixelImage, JsValue> {
    let src = image.to_core()?;
    let result = core_enhance(&src, factor).map_err(to_js_err)?;
    Ok(JsPixelImage::from_core(result))
}

/// Derive a pseudo depth map (blurred luminance) from an image.
#[wasm_bindgen]
pub fn synthesize_depth(image: &JsPixelImage, radius: u32) -> Result<JsPixelImage, JsValue> {
    let src = image.to_core()?;
    let result = core_depth(&src, radius).map_err(to_js_err)?;
    Ok(JsPixelImage::from_core(result))
}

/// Synthesize the emboss/edge "3D" illusion layer.
#[wasm_bindgen]
pub fn synthesize_3d_effect(image: &JsPixelImage) -> Result<JsPixelImage, JsValue> {
    let src = image.to_core()?;
    let result = core_effect(&src).map_err(to_js_err)?;
    Ok(JsPixelImage::from_core(result))
}

/// Compose a before/after slider comparison.
///
/// Columns left of `split_x` show `after`, the rest show `before`;
/// `after` is resampled to `before`'s dimensions when they differ.
#[wasm_bindgen]
pub fn compare_slider(
    before: &JsPixelImage,
    after: &JsPixelImage,
    split_x: u32,
) -> Result<JsPixelImage, JsValue> {
    let before = before.to_core()?;
    let after = after.to_core()?;
    let result = core_compare(&before, &after, split_x).map_err(to_js_err)?;
    Ok(JsPixelImage::from_core(result))
}

/// The three images produced by one pipeline run.
#[wasm_bindgen]
pub struct JsPipelineOutput {
    cleaned: JsPixelImage,
    depth: JsPixelImage,
    final_3d: JsPixelImage,
}

#[wasm_bindgen]
impl JsPipelineOutput {
    /// Input with the white backdrop keyed to transparency.
    pub fn cleaned(&self) -> JsPixelImage {
        JsPixelImage::new(
            self.cleaned.width(),
            self.cleaned.height(),
            self.cleaned.pixels(),
        )
    }

    /// Blurred-luminance depth map.
    pub fn depth(&self) -> JsPixelImage {
        JsPixelImage::new(self.depth.width(), self.depth.height(), self.depth.pixels())
    }

    /// Emboss/edge blend giving the 3D illusion.
    pub fn final_3d(&self) -> JsPixelImage {
        JsPixelImage::new(
            self.final_3d.width(),
            self.final_3d.height(),
            self.final_3d.pixels(),
        )
    }
}

/// Run the full preview pipeline on one image.
///
/// # Arguments
///
/// * `image` - Decoded source image
/// * `options` - Optional `{ white_threshold, enhancement, blur_radius }`
///   object; pass `undefined` for the product defaults
#[wasm_bindgen]
pub fn run_pipeline(image: &JsPixelImage, options: JsValue) -> Result<JsPipelineOutput, JsValue> {
    let opts: PipelineOptions = if options.is_undefined() || options.is_null() {
        PipelineOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let src = image.to_core()?;
    let out = core_pipeline(&src, &opts).map_err(to_js_err)?;

    Ok(JsPipelineOutput {
        cleaned: JsPixelImage::from_core(out.cleaned),
        depth: JsPixelImage::from_core(out.depth),
        final_3d: JsPixelImage::from_core(out.final_3d),
    })
}

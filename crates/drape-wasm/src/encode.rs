//! WASM bindings for image encoding.

use crate::types::JsPixelImage;
use drape_core::encode::{encode_jpeg as core_jpeg, encode_png as core_png};
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes, preserving transparency.
///
/// Use this for keyed images so the transparent backdrop survives.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelImage) -> Result<Vec<u8>, JsValue> {
    let buf = image.to_core()?;
    core_png(&buf).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to JPEG bytes.
///
/// JPEG has no alpha channel; transparency is dropped.
///
/// # Arguments
///
/// * `image` - Source image
/// * `quality` - JPEG quality (1-100, clamped)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let buf = image.to_core()?;
    core_jpeg(&buf, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

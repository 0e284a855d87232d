//! WASM bindings for image decoding and resizing.

use crate::types::JsPixelImage;
use drape_core::decode::decode_image as core_decode;
use drape_core::resize::{resize as core_resize, FilterType};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG file into an RGBA image.
///
/// The format is guessed from the bytes, not the filename.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelImage, JsValue> {
    let buf = core_decode(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsPixelImage::from_core(buf))
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - Source image
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `use_nearest` - Use nearest-neighbor sampling (fast) instead of
///   bilinear
#[wasm_bindgen]
pub fn resize(
    image: &JsPixelImage,
    width: u32,
    height: u32,
    use_nearest: bool,
) -> Result<JsPixelImage, JsValue> {
    let src = image.to_core()?;
    let filter = if use_nearest {
        FilterType::Nearest
    } else {
        FilterType::Bilinear
    };

    let result =
        core_resize(&src, width, height, filter).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsPixelImage::from_core(result))
}

//! Drape WASM - WebAssembly bindings for Drape
//!
//! This crate exposes the drape-core garment preview pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (JPEG/PNG upload, resize)
//! - `encode` - Image encoding bindings (PNG/JPEG export)
//! - `pipeline` - Pipeline stage bindings (keying, enhancement, depth,
//!   3D effect, slider comparison)
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, run_pipeline } from '@drape/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const preview = run_pipeline(image, undefined);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod pipeline;
mod types;

// Re-export public types
pub use decode::{decode_image, resize};
pub use encode::{encode_jpeg, encode_png};
pub use pipeline::{
    compare_slider, enhance_color, key_background, run_pipeline, synthesize_3d_effect,
    synthesize_depth, JsPipelineOutput,
};
pub use types::JsPixelImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

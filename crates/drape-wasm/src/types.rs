//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Drape
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use drape_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelImage {
    /// Create a new JsPixelImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelImage {
        JsPixelImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelImage {
    /// Create a JsPixelImage from a core PixelBuffer.
    pub(crate) fn from_core(buf: PixelBuffer) -> Self {
        Self {
            width: buf.width,
            height: buf.height,
            pixels: buf.pixels,
        }
    }

    /// Convert back to a core PixelBuffer, validating it in the process.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_core(&self) -> Result<PixelBuffer, JsValue> {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

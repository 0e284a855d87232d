//! The shared RGBA pixel buffer all pipeline stages operate on.
//!
//! A [`PixelBuffer`] is a row-major raster with a top-left origin and four
//! bytes per pixel (R, G, B, A). Stages never mutate their input; each one
//! reads a buffer and returns a freshly allocated result, which is what makes
//! the pipeline trivially parallelizable across images.

use crate::error::PipelineError;

/// One of the four RGBA planes, for bulk channel extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Byte offset of this channel within a 4-byte RGBA pixel.
    #[inline]
    fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

/// An RGBA image with explicit dimensions.
///
/// Pixel data is stored in row-major order (4 bytes per pixel), so the pixel
/// at `(x, y)` starts at byte `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer, validating dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidDimensions` if either dimension is
    /// zero, or `PipelineError::InvalidPixelData` if the buffer length
    /// doesn't match `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(PipelineError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Promote 3-channel RGB data to a 4-channel buffer, filling alpha
    /// with 255 (fully opaque).
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize) * 3;
        if rgb.len() != expected {
            return Err(PipelineError::InvalidPixelData {
                expected,
                actual: rgb.len(),
            });
        }

        let mut pixels = Vec::with_capacity(expected / 3 * 4);
        for chunk in rgb.chunks_exact(3) {
            pixels.extend_from_slice(chunk);
            pixels.push(255);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Demote to 3-channel RGB data, dropping the alpha plane.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() as usize * 3);
        for chunk in self.pixels.chunks_exact(4) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    /// Create a PixelBuffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbaImage` for codec/resample operations.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Read the RGBA pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::OutOfBounds` if `(x, y)` is outside the raster.
    pub fn get(&self, x: u32, y: u32) -> Result<[u8; 4], PipelineError> {
        let i = self.index_of(x, y)?;
        Ok([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Write the RGBA pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::OutOfBounds` if `(x, y)` is outside the raster.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> Result<(), PipelineError> {
        let i = self.index_of(x, y)?;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
        Ok(())
    }

    /// Extract one plane as a contiguous vector (e.g. all red values),
    /// in row-major pixel order.
    pub fn channel(&self, channel: Channel) -> Vec<u8> {
        let offset = channel.offset();
        self.pixels
            .chunks_exact(4)
            .map(|chunk| chunk[offset])
            .collect()
    }

    /// Validate dimensions and buffer length.
    ///
    /// Called at the boundary of every pipeline stage so that malformed
    /// buffers (possible because the fields are public) are rejected before
    /// any computation begins.
    pub fn check(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = (self.width as usize) * (self.height as usize) * 4;
        if self.pixels.len() != expected {
            return Err(PipelineError::InvalidPixelData {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Result<usize, PipelineError> {
        if x >= self.width || y >= self.height {
            return Err(PipelineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=32, 1u32..=32)
    }

    proptest! {
        /// Property: RGB promotion then demotion returns the original data.
        #[test]
        fn prop_rgb_roundtrip(
            (width, height) in dimensions_strategy(),
            seed in 0u8..=255,
        ) {
            let rgb: Vec<u8> = (0..(width * height * 3) as usize)
                .map(|i| (i as u8).wrapping_add(seed))
                .collect();
            let buf = PixelBuffer::from_rgb(width, height, &rgb).unwrap();
            prop_assert_eq!(buf.to_rgb(), rgb);
        }

        /// Property: every alpha byte after promotion is 255.
        #[test]
        fn prop_promotion_opaque(
            (width, height) in dimensions_strategy(),
        ) {
            let rgb = vec![17u8; (width * height * 3) as usize];
            let buf = PixelBuffer::from_rgb(width, height, &rgb).unwrap();
            prop_assert!(buf.channel(Channel::Alpha).iter().all(|&a| a == 255));
        }

        /// Property: get() succeeds exactly inside the raster.
        #[test]
        fn prop_get_bounds(
            (width, height) in dimensions_strategy(),
            x in 0u32..=40,
            y in 0u32..=40,
        ) {
            let buf = PixelBuffer::new(width, height, vec![0u8; (width * height * 4) as usize]).unwrap();
            let inside = x < width && y < height;
            prop_assert_eq!(buf.get(x, y).is_ok(), inside);
        }
    }
}

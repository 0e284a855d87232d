//! Luminance calculation utilities using ITU-R BT.601 coefficients.
//!
//! The depth synthesizer and color enhancer both reduce pixels to a single
//! perceptual brightness value; this module keeps the weighting in one place
//! so the two stages always agree.

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from u8 RGB values, keeping full float precision.
///
/// Returns a value in the 0.0 to 255.0 range. Use this when the result
/// feeds further arithmetic (blur, interpolation) so quantization only
/// happens once at the end.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32
}

/// Calculate luminance from u8 RGB values, rounded to a u8.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    luminance(r, g, b).clamp(0.0, 255.0).round() as u8
}

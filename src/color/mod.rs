//! Color representation, conversion and difference module
//!
//! This module handles the sRGB → XYZ → CIELAB conversion, canonical hex
//! strings and the CIEDE2000 perceptual distance.

pub mod conversion;
pub mod difference;
pub mod hex;

pub use conversion::ColorConverter;
pub use difference::{ciede2000, DeltaECategory};
pub use hex::HexColor;

use palette::white_point::D65;

/// 8-bit sRGB triple as produced by the swatch quantizer
pub type RgbColor = palette::Srgb<u8>;

/// CIELAB color relative to D65; derived, never stored by callers
pub type LabColor = palette::Lab<D65, f64>;

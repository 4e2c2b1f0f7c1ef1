//! Color space conversion utilities
//!
//! Provides the conversions the matcher needs:
//! - 8-bit sRGB to linear-light CIE XYZ (D65, Y scaled to 100)
//! - CIE XYZ to CIELAB relative to the D65 reference white
//! - Hex color representation
//! - CIEDE2000 distance between Lab or sRGB colors
//!
//! Channels are normalized to [0, 1] before the sRGB companding threshold
//! is applied.
//!
//! Algorithm tag: `algo-srgb-xyz-lab`

use crate::constants::{cielab, d65, srgb, D65_WHITE_POINT_XYZ};
use crate::Result;

use super::{ciede2000, HexColor, LabColor, RgbColor};

/// Color converter from 8-bit sRGB to CIELAB
#[derive(Debug, Clone, Copy)]
pub struct ColorConverter {
    /// Reference white in XYZ (always D65, Y = 100)
    white_point: [f64; 3],
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a new color converter with D65 as reference white
    pub fn new() -> Self {
        Self {
            white_point: D65_WHITE_POINT_XYZ,
        }
    }

    /// Convert RGB (0-255) to Lab color space
    ///
    /// Total over all 16,777,216 inputs.
    pub fn rgb_to_lab(&self, rgb: RgbColor) -> LabColor {
        self.xyz_to_lab(self.rgb_to_xyz(rgb))
    }

    /// Convert RGB (0-255) to linear-light XYZ
    ///
    /// # Returns
    ///
    /// `[X, Y, Z]` with white at roughly `[95.05, 100, 108.9]`
    pub fn rgb_to_xyz(&self, rgb: RgbColor) -> [f64; 3] {
        let linear = [
            srgb_to_linear(rgb.red),
            srgb_to_linear(rgb.green),
            srgb_to_linear(rgb.blue),
        ];

        d65::SRGB_TO_XYZ.map(|row| row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2])
    }

    /// Convert XYZ (Y = 100 scale) to Lab relative to the reference white
    pub fn xyz_to_lab(&self, xyz: [f64; 3]) -> LabColor {
        let fx = lab_f(xyz[0] / self.white_point[0]);
        let fy = lab_f(xyz[1] / self.white_point[1]);
        let fz = lab_f(xyz[2] / self.white_point[2]);

        LabColor::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Convert sRGB to its canonical hex string
    pub fn rgb_to_hex(&self, rgb: RgbColor) -> HexColor {
        HexColor::from(rgb)
    }

    /// Parse a `#rrggbb` string to sRGB
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColorFormat` if the string is malformed
    pub fn hex_to_rgb(&self, hex: &str) -> Result<RgbColor> {
        Ok(HexColor::parse(hex)?.to_rgb())
    }

    /// Compute the CIEDE2000 color difference between two Lab colors
    pub fn delta_e(&self, lab1: LabColor, lab2: LabColor) -> f64 {
        ciede2000(lab1, lab2)
    }

    /// Compute the CIEDE2000 color difference between two sRGB colors
    pub fn rgb_distance(&self, rgb1: RgbColor, rgb2: RgbColor) -> f64 {
        self.delta_e(self.rgb_to_lab(rgb1), self.rgb_to_lab(rgb2))
    }
}

/// Inverse sRGB companding of one 8-bit channel, scaled to [0, 100]
fn srgb_to_linear(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    let linear = if value <= srgb::LINEAR_THRESHOLD {
        value / srgb::LINEAR_SLOPE
    } else {
        ((value + srgb::GAMMA_OFFSET) / srgb::GAMMA_SCALE).powf(srgb::GAMMA)
    };
    linear * srgb::LINEAR_RANGE
}

/// CIE Lab transfer function
fn lab_f(ratio: f64) -> f64 {
    if ratio > cielab::EPSILON {
        ratio.cbrt()
    } else {
        ratio * cielab::KAPPA_SLOPE + cielab::LINEAR_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Srgb};

    fn assert_lab(lab: LabColor, expected: (f64, f64, f64)) {
        assert!((lab.l - expected.0).abs() < 1e-4, "L {} vs {}", lab.l, expected.0);
        assert!((lab.a - expected.1).abs() < 1e-4, "a {} vs {}", lab.a, expected.1);
        assert!((lab.b - expected.2).abs() < 1e-4, "b {} vs {}", lab.b, expected.2);
    }

    #[test]
    fn test_rgb_to_lab_black() {
        let converter = ColorConverter::new();
        assert_lab(converter.rgb_to_lab(RgbColor::new(0, 0, 0)), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_to_lab_white() {
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(RgbColor::new(255, 255, 255));
        assert!((lab.l - 100.0).abs() < 1e-4);
        assert!(lab.a.abs() < 0.01); // Should be near neutral
        assert!(lab.b.abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_lab_primaries() {
        let converter = ColorConverter::new();
        assert_lab(
            converter.rgb_to_lab(RgbColor::new(255, 0, 0)),
            (53.240588, 80.092308, 67.202751),
        );
        assert_lab(
            converter.rgb_to_lab(RgbColor::new(0, 255, 0)),
            (87.735099, -86.183030, 83.179703),
        );
        assert_lab(
            converter.rgb_to_lab(RgbColor::new(0, 0, 255)),
            (32.295673, 79.185591, -107.857300),
        );
    }

    #[test]
    fn test_rgb_to_lab_dark_gray_uses_linear_segments() {
        // 10/255 sits below the companding threshold and Y/Yn below epsilon
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(RgbColor::new(10, 10, 10));
        assert!((lab.l - 2.741735).abs() < 1e-4);
    }

    #[test]
    fn test_rgb_to_xyz_white() {
        let converter = ColorConverter::new();
        let xyz = converter.rgb_to_xyz(RgbColor::new(255, 255, 255));
        assert!((xyz[0] - 95.0456).abs() < 1e-3);
        assert!((xyz[1] - 100.0).abs() < 1e-3);
        assert!((xyz[2] - 108.8754).abs() < 1e-3);
    }

    #[test]
    fn test_matches_palette_conversion() {
        // palette derives its matrix from the primaries; agree to a few hundredths
        let converter = ColorConverter::new();
        for (r, g, b) in [(250, 5, 5), (18, 52, 86), (200, 180, 40), (128, 128, 128)] {
            let ours = converter.rgb_to_lab(RgbColor::new(r, g, b));
            let theirs = LabColor::from_color(Srgb::<u8>::new(r, g, b).into_format::<f64>());
            assert!((ours.l - theirs.l).abs() < 0.1);
            assert!((ours.a - theirs.a).abs() < 0.1);
            assert!((ours.b - theirs.b).abs() < 0.1);
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let converter = ColorConverter::new();
        let rgb = converter.hex_to_rgb("#0aabcd").unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (10, 171, 205));
        assert_eq!(converter.rgb_to_hex(rgb).as_str(), "#0aabcd");
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        let converter = ColorConverter::new();

        assert!(converter.hex_to_rgb("#FF").is_err()); // Too short
        assert!(converter.hex_to_rgb("#GGGGGG").is_err()); // Invalid chars
    }

    #[test]
    fn test_delta_e_same_color() {
        let converter = ColorConverter::new();
        let lab = LabColor::new(50.0, 0.0, 0.0);
        assert_eq!(converter.delta_e(lab, lab), 0.0);
    }

    #[test]
    fn test_rgb_distance() {
        let converter = ColorConverter::new();
        let near_red = converter.rgb_distance(RgbColor::new(250, 5, 5), RgbColor::new(255, 0, 0));
        assert!((near_red - 1.053256).abs() < 1e-4);

        let red_green = converter.rgb_distance(RgbColor::new(255, 0, 0), RgbColor::new(0, 255, 0));
        assert!(red_green > 80.0);
    }
}

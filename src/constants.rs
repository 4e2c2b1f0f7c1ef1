//! Colorimetric constants and reference values for color matching
//!
//! This module contains compile-time constants for the sRGB → CIELAB
//! conversion and the CIEDE2000 color difference formula.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. This is the standard reference for digital
/// images and computer displays.
pub mod d65 {
    /// D65 white point in CIE XYZ, scaled so that Y = 100
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f64; 3] = [95.047, 100.0, 108.883];

    /// Linear sRGB → XYZ matrix (rows X, Y, Z) for the D65 white point
    pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
        [0.412453, 0.357580, 0.180423],
        [0.212671, 0.715160, 0.072169],
        [0.019334, 0.119193, 0.950227],
    ];
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function parameters
pub mod srgb {
    /// Normalized channel value at or below which the linear segment applies
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Slope of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Offset and scale of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA: f64 = 2.4;

    /// Linear channels are scaled to [0, 100] before the XYZ matrix
    pub const LINEAR_RANGE: f64 = 100.0;
}

/// CIE XYZ → L*a*b* nonlinearity parameters
pub mod cielab {
    /// Ratio above which the cube root applies
    pub const EPSILON: f64 = 0.008856;

    /// Slope of the linear segment below `EPSILON`
    pub const KAPPA_SLOPE: f64 = 7.787;

    /// Offset of the linear segment
    pub const LINEAR_OFFSET: f64 = 16.0 / 116.0;
}

/// CIEDE2000 formula constants
pub mod ciede2000 {
    /// 25⁷, the chroma pivot of the G and R_C terms
    pub const POW25_7: f64 = 6_103_515_625.0;

    /// Parametric weighting factors (graphic arts reference conditions)
    pub const K_L: f64 = 1.0;
    pub const K_C: f64 = 1.0;
    pub const K_H: f64 = 1.0;
}

/// Perceptual ΔE00 bands
pub mod thresholds {
    /// Below this ΔE00 a difference is not perceptible
    pub const IMPERCEPTIBLE: f64 = 1.0;

    /// Below this ΔE00 a difference needs close observation
    pub const BARELY_PERCEPTIBLE: f64 = 2.0;

    /// Below this ΔE00 a difference is visible at a glance
    pub const NOTICEABLE: f64 = 10.0;

    /// At or above this ΔE00 colors are nearly opposite
    pub const VERY_DISTINCT: f64 = 50.0;
}

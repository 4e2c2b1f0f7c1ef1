//! CIEDE2000 color difference
//!
//! Implements the ΔE00 formula as laid out in "The CIEDE2000
//! Color-Difference Formula: Implementation Notes, Supplementary Test Data,
//! and Mathematical Observations" (Sharma, Wu, Dalal, 2005) with
//! kL = kC = kH = 1.
//!
//! Hue conventions:
//! - atan2(0, 0) is taken as 0°, so achromatic colors have hue 0
//! - hue angles live in [0°, 360°)
//! - the mean hue of a pair more than 180° apart is (h1' + h2' + 360°) / 2
//!
//! Algorithm tag: `algo-ciede2000`

use super::LabColor;
use crate::constants::{ciede2000::*, thresholds};

/// Perceptual band of a ΔE00 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaECategory {
    /// ΔE00 < 1.0 - Not perceptible by human eyes
    Imperceptible,
    /// ΔE00 1.0-2.0 - Perceptible through close observation
    BarelyPerceptible,
    /// ΔE00 2.0-10.0 - Perceptible at a glance
    Noticeable,
    /// ΔE00 10.0-50.0 - Colors more similar than opposite
    Distinct,
    /// ΔE00 >= 50.0 - Colors are nearly opposite
    VeryDistinct,
}

impl DeltaECategory {
    /// Categorize a ΔE00 value
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e < thresholds::IMPERCEPTIBLE {
            Self::Imperceptible
        } else if delta_e < thresholds::BARELY_PERCEPTIBLE {
            Self::BarelyPerceptible
        } else if delta_e < thresholds::NOTICEABLE {
            Self::Noticeable
        } else if delta_e < thresholds::VERY_DISTINCT {
            Self::Distinct
        } else {
            Self::VeryDistinct
        }
    }
}

/// CIEDE2000 color difference (ΔE00) between two Lab colors
///
/// Symmetric, non-negative and zero for identical inputs. Never NaN for
/// finite inputs.
pub fn ciede2000(lab1: LabColor, lab2: LabColor) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    let avg_lp = (l1 + l2) / 2.0;

    // Chroma-dependent stretch of the a* axis
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let avg_c = (c1 + c2) / 2.0;
    let g = 0.5 * (1.0 - chroma_ratio(avg_c));

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let avg_cp = (c1p + c2p) / 2.0;

    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    let avg_hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let t = 1.0 - 0.17 * cos_deg(avg_hp - 30.0)
        + 0.24 * cos_deg(2.0 * avg_hp)
        + 0.32 * cos_deg(3.0 * avg_hp + 6.0)
        - 0.20 * cos_deg(4.0 * avg_hp - 63.0);

    let delta_lp = l2 - l1;
    let delta_cp = c2p - c1p;

    let mut delta_hp_angle = h2p - h1p;
    if delta_hp_angle.abs() > 180.0 {
        if h2p > h1p {
            delta_hp_angle -= 360.0;
        } else {
            delta_hp_angle += 360.0;
        }
    }
    let delta_hp = 2.0 * (c1p * c2p).sqrt() * (delta_hp_angle.to_radians() / 2.0).sin();

    let lp_offset = (avg_lp - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * lp_offset / (20.0 + lp_offset).sqrt();
    let s_c = 1.0 + 0.045 * avg_cp;
    let s_h = 1.0 + 0.015 * avg_cp * t;

    let delta_theta = 30.0 * (-((avg_hp - 275.0) / 25.0).powi(2)).exp();
    let r_c = 2.0 * chroma_ratio(avg_cp);
    let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

    let lightness = delta_lp / (K_L * s_l);
    let chroma = delta_cp / (K_C * s_c);
    let hue = delta_hp / (K_H * s_h);

    let sum = lightness * lightness + chroma * chroma + hue * hue + r_t * chroma * hue;

    // Rounding can leave a tiny negative sum for near-identical colors
    sum.max(0.0).sqrt()
}

/// sqrt(C⁷ / (C⁷ + 25⁷)), shared by the G and R_C terms
fn chroma_ratio(chroma: f64) -> f64 {
    let c7 = chroma.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Hue angle of (a', b) in degrees within [0, 360)
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let degrees = b.atan2(a_prime).to_degrees();
    let normalized = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    // -ε + 360 rounds up to exactly 360
    if normalized >= 360.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab(l: f64, a: f64, b: f64) -> LabColor {
        LabColor::new(l, a, b)
    }

    /// Reference pairs from Sharma, Wu, Dalal (2005), Table 1
    #[test]
    fn test_ciede2000_reference_pairs() {
        // Each tuple: (L1, a1, b1, L2, a2, b2, expected ΔE00)
        let test_cases = [
            (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
            (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
            (50.0, -1.0, 2.0, 50.0, 0.0, 0.0, 2.3669),
            (50.0, 2.49, -0.001, 50.0, -2.49, 0.0009, 7.1792),
            (50.0, -0.001, 2.49, 50.0, 0.0009, -2.49, 4.8045),
            (50.0, -0.001, 2.49, 50.0, 0.0011, -2.49, 4.7461),
            (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
            (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
            (50.0, 2.5, 0.0, 61.0, -5.0, 29.0, 22.8977),
            (50.0, 2.5, 0.0, 56.0, -27.0, -3.0, 31.9030),
            (50.0, 2.5, 0.0, 58.0, 24.0, 15.0, 19.4535),
            (50.0, 2.5, 0.0, 50.0, 3.1736, 0.5854, 1.0000),
            (50.0, 2.5, 0.0, 50.0, 3.2972, 0.0, 1.0000),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630),
            (61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731),
            (35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645),
            (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
            (36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146),
            (90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441),
            (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
            (6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377),
            (2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082),
        ];

        for (i, &(l1, a1, b1, l2, a2, b2, expected)) in test_cases.iter().enumerate() {
            let result = ciede2000(lab(l1, a1, b1), lab(l2, a2, b2));
            let diff = (result - expected).abs();
            assert!(
                diff < 5e-4,
                "Pair {}: expected {:.4}, got {:.4}, diff {:.5}",
                i + 1,
                expected,
                result,
                diff
            );
        }
    }

    #[test]
    fn test_identical_colors() {
        let color = lab(50.0, 25.0, -30.0);
        assert_eq!(ciede2000(color, color), 0.0);
    }

    #[test]
    fn test_both_achromatic() {
        // Zero chroma on both sides: hue defaults to 0, no NaN
        let black = lab(0.0, 0.0, 0.0);
        let white = lab(100.0, 0.0, 0.0);
        let de = ciede2000(black, white);
        assert!(de.is_finite());
        assert!(de > 50.0);
    }

    #[test]
    fn test_negative_zero_components() {
        // atan2(-0, -0) is -180°; the zero-chroma convention must win
        let signed = lab(40.0, -0.0, -0.0);
        let plain = lab(40.0, 0.0, 0.0);
        assert_eq!(ciede2000(signed, plain), 0.0);
    }

    #[test]
    fn test_symmetry_across_hue_wrap() {
        // Hues near 10° and 350° straddle the 0/360 seam
        let warm = lab(55.0, 40.0, 7.0);
        let cool = lab(55.0, 40.0, -7.0);
        let forward = ciede2000(warm, cool);
        let backward = ciede2000(cool, warm);
        assert!((forward - backward).abs() < 1e-12);
        assert!(forward > 0.0);
    }

    #[test]
    fn test_hue_angle_range() {
        assert_eq!(hue_angle(0.0, 0.0), 0.0);
        assert!((hue_angle(1.0, 0.0) - 90.0).abs() < 1e-12);
        assert!((hue_angle(-1.0, 0.0) - 270.0).abs() < 1e-12);
        assert!((hue_angle(0.0, -1.0) - 180.0).abs() < 1e-12);
        let tiny = hue_angle(-1e-300, 1.0);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_categories() {
        assert_eq!(DeltaECategory::from_delta_e(0.0), DeltaECategory::Imperceptible);
        assert_eq!(DeltaECategory::from_delta_e(1.5), DeltaECategory::BarelyPerceptible);
        assert_eq!(DeltaECategory::from_delta_e(5.0), DeltaECategory::Noticeable);
        assert_eq!(DeltaECategory::from_delta_e(27.0), DeltaECategory::Distinct);
        assert_eq!(DeltaECategory::from_delta_e(86.0), DeltaECategory::VeryDistinct);
    }

    #[test]
    fn test_agrees_with_palette_ciede2000() {
        use palette::color_difference::Ciede2000;

        let pairs = [
            (lab(50.0, 2.5, 0.0), lab(73.0, 25.0, -18.0)),
            (lab(53.24, 80.09, 67.20), lab(32.30, 79.19, -107.86)),
            (lab(87.74, -86.18, 83.18), lab(60.0, -20.0, 40.0)),
            (lab(20.0, 5.0, -5.0), lab(25.0, -3.0, 8.0)),
        ];
        for (x, y) in pairs {
            let ours = ciede2000(x, y);
            let theirs = x.difference(y);
            assert!(
                (ours - theirs).abs() < 1e-3,
                "ours {:.5} vs palette {:.5}",
                ours,
                theirs
            );
        }
    }
}

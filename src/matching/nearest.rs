//! Nearest palette color lookup
//!
//! Finds the palette entry with the smallest CIEDE2000 distance to a swatch.
//! Ties go to the entry met first in canonical palette order.
//!
//! Algorithm tag: `algo-nearest-ciede2000`

use crate::color::{ColorConverter, DeltaECategory, RgbColor};
use crate::{MatchError, Result};

use super::Palette;

/// Winning palette entry for one swatch
#[derive(Debug, Clone, PartialEq)]
pub struct NearestMatch<K> {
    /// Identifier of the closest palette entry
    pub id: K,
    /// CIEDE2000 distance between swatch and entry
    pub distance: f64,
}

impl<K> NearestMatch<K> {
    /// Perceptual band of the match distance
    pub fn category(&self) -> DeltaECategory {
        DeltaECategory::from_delta_e(self.distance)
    }
}

/// Matcher mapping a swatch onto its closest palette entry
#[derive(Debug, Clone, Default)]
pub struct NearestColorMatcher {
    converter: ColorConverter,
}

impl NearestColorMatcher {
    /// Create a matcher with the D65 sRGB converter
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the palette entry closest to `swatch`
    ///
    /// # Errors
    ///
    /// Returns `MatchError::EmptyPalette` if the palette has no entries.
    /// Palette hex values are validated when the snapshot is built, so a
    /// snapshot can never hold a malformed color.
    pub fn nearest<K: Clone>(
        &self,
        swatch: RgbColor,
        palette: &Palette<K>,
    ) -> Result<NearestMatch<K>> {
        let lab = self.converter.rgb_to_lab(swatch);

        let mut best: Option<(&K, f64)> = None;
        for entry in palette {
            let distance = self.converter.delta_e(lab, entry.lab());
            // Strict comparison keeps the earliest entry on ties
            if best.map_or(true, |(_, closest)| distance < closest) {
                best = Some((entry.id(), distance));
            }
        }

        best.map(|(id, distance)| NearestMatch {
            id: id.clone(),
            distance,
        })
        .ok_or(MatchError::EmptyPalette)
    }
}

//! # Chroma Tag
//!
//! A Rust crate for tagging images with named reference colors.
//!
//! Given the ranked color swatches a quantizer extracted from an image and a
//! reference palette of named colors, this library:
//! - Converts swatches and palette colors from 8-bit sRGB to CIELAB (D65)
//! - Finds the perceptually nearest palette entry per swatch using CIEDE2000
//! - Aggregates the winners into a deduplicated, rank-ordered match list
//!   with a dominant entry
//!
//! Matching is a pure function of `(swatches, palette)`: no image decoding,
//! no quantization, no persistence.
//!
//! ## Example
//!
//! ```rust
//! use chroma_tag::{match_swatches, refresh_palette, RgbColor};
//!
//! let palette = refresh_palette([(1, "#ff0000"), (2, "#00ff00"), (3, "#0000ff")])?;
//! let swatches = [RgbColor::new(250, 5, 5), RgbColor::new(20, 20, 230)];
//!
//! let result = match_swatches(&swatches, &palette)?;
//! assert_eq!(*result.dominant(), 1);
//! assert_eq!(result.matches(), &[1, 3]);
//! # Ok::<(), chroma_tag::MatchError>(())
//! ```

use std::hash::Hash;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod matching;

pub use color::{ciede2000, ColorConverter, DeltaECategory, HexColor, LabColor, RgbColor};
pub use config::{MatcherConfig, PaletteFile, PaletteRecord};
pub use error::{MatchError, Result};
pub use matching::{
    refresh_palette, DominantColorPipeline, MatchResult, NearestColorMatcher, NearestMatch,
    Palette, PaletteEntry, PaletteStore,
};

/// Match an image's ranked swatches against a palette snapshot
///
/// This is the main entry point for color tagging. Rank 0 is the most
/// dominant swatch.
///
/// # Returns
///
/// A `MatchResult` whose dominant entry is the rank-0 swatch's nearest color
/// and whose matches are the unique nearest colors in first-occurrence order
///
/// # Errors
///
/// Returns `MatchError` if:
/// - The palette has no entries (`EmptyPalette`)
/// - No swatches were given (`EmptySwatchList`)
pub fn match_swatches<K>(swatches: &[RgbColor], palette: &Palette<K>) -> Result<MatchResult<K>>
where
    K: Clone + Eq + Hash,
{
    DominantColorPipeline::new().match_swatches(swatches, palette)
}

/// Find the palette entry perceptually nearest to one swatch
///
/// # Errors
///
/// Returns `MatchError::EmptyPalette` if the palette has no entries
pub fn nearest<K: Clone>(swatch: RgbColor, palette: &Palette<K>) -> Result<NearestMatch<K>> {
    NearestColorMatcher::new().nearest(swatch, palette)
}

//! Palette snapshots and swatch matching module
//!
//! This module holds the immutable reference palette, the nearest-color
//! lookup and the pipeline that turns an image's ranked swatches into a
//! deduplicated match list with a dominant entry.

pub mod nearest;
pub mod palette;
pub mod pipeline;

pub use nearest::{NearestColorMatcher, NearestMatch};
pub use palette::{refresh_palette, Palette, PaletteEntry, PaletteStore};
pub use pipeline::{DominantColorPipeline, MatchResult};

//! Dominant color pipeline
//!
//! Matches an image's ranked swatches against a palette snapshot and folds
//! the per-swatch winners into a [`MatchResult`]:
//! - the dominant entry is the winner of the rank-0 swatch
//! - matches keep first-occurrence order with duplicates removed
//!
//! Algorithm tag: `algo-dominant-color-aggregation`

use std::collections::HashSet;
use std::hash::Hash;

use rayon::prelude::*;
use serde::Serialize;

use crate::color::RgbColor;
use crate::config::MatcherConfig;
use crate::{MatchError, Result};

use super::{NearestColorMatcher, NearestMatch, Palette};

/// Palette entries matched for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<K> {
    dominant: K,
    matches: Vec<K>,
}

impl<K> MatchResult<K>
where
    K: Clone + Eq + Hash,
{
    /// Fold identifiers in swatch rank order into a result
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_ranked<I>(ranked: I) -> Option<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut seen = HashSet::new();
        let matches: Vec<K> = ranked
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        let dominant = matches.first()?.clone();
        Some(Self { dominant, matches })
    }
}

impl<K> MatchResult<K> {
    /// Entry matched by the most dominant swatch
    pub fn dominant(&self) -> &K {
        &self.dominant
    }

    /// Unique matched entries, dominant first
    pub fn matches(&self) -> &[K] {
        &self.matches
    }

    /// Split into `(dominant, matches)` for the storage layer
    pub fn into_parts(self) -> (K, Vec<K>) {
        (self.dominant, self.matches)
    }

    /// Keep at most `limit` matches; the dominant entry always survives
    fn truncate(&mut self, limit: usize) {
        self.matches.truncate(limit.max(1));
    }
}

/// Orchestrates nearest-color matching over an image's swatches
#[derive(Debug, Clone, Default)]
pub struct DominantColorPipeline {
    matcher: NearestColorMatcher,
    config: MatcherConfig,
}

impl DominantColorPipeline {
    /// Create a pipeline with the default configuration (no limits)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom limits
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` if a limit is zero
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            matcher: NearestColorMatcher::new(),
            config,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match each swatch in rank order, keeping per-swatch distances
    ///
    /// # Errors
    ///
    /// - `MatchError::EmptyPalette` if the palette has no entries, whatever the swatches
    /// - `MatchError::EmptySwatchList` if no swatches were given
    pub fn match_detailed<K: Clone>(
        &self,
        swatches: &[RgbColor],
        palette: &Palette<K>,
    ) -> Result<Vec<NearestMatch<K>>> {
        if palette.is_empty() {
            return Err(MatchError::EmptyPalette);
        }
        if swatches.is_empty() {
            return Err(MatchError::EmptySwatchList);
        }

        let considered = self.config.swatch_limit.unwrap_or(swatches.len());
        swatches
            .iter()
            .take(considered)
            .map(|&swatch| self.matcher.nearest(swatch, palette))
            .collect()
    }

    /// Match an image's ranked swatches against the palette
    ///
    /// # Errors
    ///
    /// Same as [`DominantColorPipeline::match_detailed`]. Nothing partial is
    /// returned on failure.
    pub fn match_swatches<K>(
        &self,
        swatches: &[RgbColor],
        palette: &Palette<K>,
    ) -> Result<MatchResult<K>>
    where
        K: Clone + Eq + Hash,
    {
        let ranked = self.match_detailed(swatches, palette)?;
        let mut result = MatchResult::from_ranked(ranked.into_iter().map(|found| found.id))
            .ok_or(MatchError::EmptySwatchList)?;

        if let Some(limit) = self.config.match_limit {
            result.truncate(limit);
        }
        Ok(result)
    }

    /// Match several images' swatch lists against one snapshot in parallel
    ///
    /// Results are in input order; each list succeeds or fails on its own.
    pub fn match_batch<K, B>(
        &self,
        batches: &[B],
        palette: &Palette<K>,
    ) -> Vec<Result<MatchResult<K>>>
    where
        K: Clone + Eq + Hash + Send + Sync,
        B: AsRef<[RgbColor]> + Sync,
    {
        let results: Vec<Result<MatchResult<K>>> = batches
            .par_iter()
            .map(|swatches| self.match_swatches(swatches.as_ref(), palette))
            .collect();

        let failed = results.iter().filter(|result| result.is_err()).count();
        log::debug!(
            "Matched {} swatch lists against palette v{} ({} failed)",
            results.len(),
            palette.version(),
            failed
        );
        results
    }
}

//! Configuration structures for the chroma_tag matching pipeline.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chroma_tag::{MatcherConfig, PaletteFile};
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatcherConfig::from_json_file(Path::new("matcher.json"))?;
//!
//! // Or use defaults
//! let config = MatcherConfig::default();
//!
//! // Reference colors exported from the palette store
//! let palette = PaletteFile::<u64>::from_json_file(Path::new("palette.json"))?.into_palette()?;
//! # Ok::<(), chroma_tag::MatchError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`MatcherConfig`]: swatch and match list limits
//! - [`PaletteFile`]: reference colors as `(id, hex)` records

use std::fmt::Debug;
use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::matching::{refresh_palette, Palette};
use crate::{MatchError, Result};

/// Tunable limits of the dominant color pipeline.
///
/// Both limits are optional; `None` means every swatch is matched and every
/// unique match is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Match only the first N ranked swatches
    #[serde(default)]
    pub swatch_limit: Option<usize>,

    /// Keep at most N unique matches (the dominant entry is always kept)
    #[serde(default)]
    pub match_limit: Option<usize>,
}

impl MatcherConfig {
    /// Configuration matching a quantizer that reports five swatches per
    /// image and a tagger that keeps five colors
    pub fn five_color() -> Self {
        Self {
            swatch_limit: Some(5),
            match_limit: Some(5),
        }
    }

    /// Check that every limit present is at least one
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` naming the offending limit
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("swatch_limit", self.swatch_limit),
            ("match_limit", self.match_limit),
        ];
        for (parameter, limit) in limits {
            if limit == Some(0) {
                return Err(MatchError::InvalidParameter {
                    parameter: parameter.to_string(),
                    value: "0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config: Self = read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::config("Failed to serialize matcher configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| MatchError::config(format!("Failed to write {}", path.display()), e))?;
        log::debug!("Matcher configuration saved to {}", path.display());
        Ok(())
    }
}

/// One reference color as exported by the palette store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRecord<K> {
    /// Stable identifier of the color
    pub id: K,

    /// Color as `#rrggbb`; validated when the palette is built
    pub hex: String,
}

/// Palette document: `{ "entries": [ { "id": ..., "hex": "#rrggbb" } ] }`.
///
/// Entry order is preserved and becomes the snapshot's canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteFile<K> {
    pub entries: Vec<PaletteRecord<K>>,
}

impl<K> PaletteFile<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Load a palette document from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self>
    where
        K: DeserializeOwned,
    {
        read_json(path)
    }

    /// Validate the records and build a palette snapshot
    ///
    /// # Errors
    ///
    /// Same as [`refresh_palette`]
    pub fn into_palette(self) -> Result<Palette<K>> {
        refresh_palette(self.entries.into_iter().map(|record| (record.id, record.hex)))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MatchError::config(format!("Failed to read {}", path.display()), e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| MatchError::config(format!("Failed to parse {}", path.display()), e))?;
    log::debug!("Loaded {}", path.display());
    Ok(value)
}

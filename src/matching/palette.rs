//! Reference palette snapshots
//!
//! A [`Palette`] is an immutable, ordered set of named reference colors.
//! Its iteration order is the order the palette store supplied the entries
//! in; that order is the tie-break order of nearest-color matching.
//!
//! [`PaletteStore`] holds the snapshot currently in use. A refresh builds a
//! brand-new snapshot and swaps it in; passes that already hold the previous
//! snapshot keep matching against it undisturbed.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use crate::color::{ColorConverter, HexColor, LabColor, RgbColor};
use crate::{MatchError, Result};

/// One named reference color with its Lab coordinates cached
#[derive(Debug, Clone)]
pub struct PaletteEntry<K> {
    id: K,
    hex: HexColor,
    rgb: RgbColor,
    lab: LabColor,
}

impl<K> PaletteEntry<K> {
    fn new(id: K, hex: HexColor, converter: &ColorConverter) -> Self {
        let rgb = hex.to_rgb();
        Self {
            id,
            hex,
            rgb,
            lab: converter.rgb_to_lab(rgb),
        }
    }

    /// Stable identifier assigned by the palette store
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Canonical hex form
    pub fn hex(&self) -> &HexColor {
        &self.hex
    }

    /// 8-bit sRGB form
    pub fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Lab coordinates, computed once per snapshot
    pub fn lab(&self) -> LabColor {
        self.lab
    }
}

/// Immutable snapshot of the reference palette
#[derive(Debug, Clone)]
pub struct Palette<K> {
    entries: Vec<PaletteEntry<K>>,
    index: HashMap<K, usize>,
    version: u64,
}

impl<K> Palette<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Build a snapshot from `(identifier, hex)` pairs in canonical order
    ///
    /// # Errors
    ///
    /// - `MatchError::InvalidColorFormat` on the first malformed hex value
    /// - `MatchError::DuplicatePaletteId` if an identifier repeats
    ///
    /// No snapshot is produced on failure.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        let converter = ColorConverter::new();
        let mut palette = Self {
            entries: Vec::new(),
            index: HashMap::new(),
            version: 0,
        };

        for (id, hex) in entries {
            let hex = HexColor::parse(hex.as_ref())?;
            if palette.index.contains_key(&id) {
                return Err(MatchError::DuplicatePaletteId {
                    id: format!("{id:?}"),
                });
            }
            palette.index.insert(id.clone(), palette.entries.len());
            palette.entries.push(PaletteEntry::new(id, hex, &converter));
        }

        Ok(palette)
    }

    /// Look up an entry by identifier
    pub fn get(&self, id: &K) -> Option<&PaletteEntry<K>> {
        self.index.get(id).and_then(|&at| self.entries.get(at))
    }

    /// Whether `id` names an entry of this snapshot
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }
}

impl<K> Palette<K> {
    /// Entries in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry<K>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot version assigned by the [`PaletteStore`]; 0 for standalone snapshots
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<'a, K> IntoIterator for &'a Palette<K> {
    type Item = &'a PaletteEntry<K>;
    type IntoIter = std::slice::Iter<'a, PaletteEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Validate `(identifier, hex)` pairs from the palette store and build a snapshot
///
/// # Errors
///
/// Fails with `MatchError::InvalidColorFormat` on the first malformed entry,
/// or `MatchError::DuplicatePaletteId` on a repeated identifier.
pub fn refresh_palette<K, I, S>(entries: I) -> Result<Palette<K>>
where
    K: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = (K, S)>,
    S: AsRef<str>,
{
    Palette::from_entries(entries)
}

/// Holder of the palette snapshot currently in use
///
/// Readers take the current `Arc` once at the start of a matching pass;
/// refreshes replace it wholesale.
#[derive(Debug)]
pub struct PaletteStore<K> {
    current: RwLock<Arc<Palette<K>>>,
}

impl<K> Default for PaletteStore<K> {
    fn default() -> Self {
        Self {
            current: RwLock::new(Arc::new(Palette {
                entries: Vec::new(),
                index: HashMap::new(),
                version: 0,
            })),
        }
    }
}

impl<K> PaletteStore<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Create a store holding an empty snapshot (version 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `palette` as version 1
    pub fn with_palette(mut palette: Palette<K>) -> Self {
        palette.version = 1;
        Self {
            current: RwLock::new(Arc::new(palette)),
        }
    }

    /// The snapshot a new matching pass should use
    pub fn current(&self) -> Arc<Palette<K>> {
        // The guarded value is a single Arc; a poisoned lock still holds a whole snapshot.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Build a new snapshot from store entries and swap it in
    ///
    /// # Errors
    ///
    /// Same as [`refresh_palette`]. On failure the active snapshot is left
    /// untouched.
    pub fn refresh<I, S>(&self, entries: I) -> Result<Arc<Palette<K>>>
    where
        I: IntoIterator<Item = (K, S)>,
        S: AsRef<str>,
    {
        let mut palette = match refresh_palette(entries) {
            Ok(palette) => palette,
            Err(err) => {
                log::warn!("Palette refresh rejected, keeping current snapshot: {err}");
                return Err(err);
            }
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        palette.version = current.version + 1;
        let snapshot = Arc::new(palette);
        *current = Arc::clone(&snapshot);
        drop(current);

        log::debug!(
            "Palette snapshot v{} active with {} entries",
            snapshot.version,
            snapshot.len()
        );
        Ok(snapshot)
    }
}

//! The 64-hexagram catalog.
//!
//! Static reference data keyed by signature. The catalog is loaded once,
//! validated eagerly so a corrupt dataset fails before any casting happens,
//! and read-only afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::hexagram::Signature;

/// Number of entries a valid catalog carries, one per possible signature.
pub const CATALOG_SIZE: usize = 64;

const BUNDLED: &str = include_str!("../data/hexagrams.json");

/// Static reference data for one hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// King Wen ordinal, 1 through 64.
    pub number: u8,
    /// Hexagram name; unique within the catalog.
    pub name: String,
    /// The signature this entry is keyed by.
    pub binary: Signature,
    /// Name of the upper trigram.
    pub upper_trigram: String,
    /// Name of the lower trigram.
    pub lower_trigram: String,
    /// Judgment text.
    pub description: String,
    /// One text per line, position 1 (bottom) through 6 (top).
    pub line_texts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    hexagrams: Vec<CatalogEntry>,
}

/// The immutable 64-entry hexagram table.
///
/// Every possible signature resolves to exactly one entry; numbers 1
/// through 64 and names are likewise unique. All of this is checked at
/// load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_signature: HashMap<Signature, usize>,
    by_number: HashMap<u8, usize>,
    by_name_lower: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the dataset bundled with this crate.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Loads a dataset from a JSON file with the bundled schema.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CoreError::DataLoad(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON dataset.
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(text).map_err(|e| CoreError::DataLoad(e.to_string()))?;
        Self::build(file.hexagrams)
    }

    fn build(mut entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        if entries.len() != CATALOG_SIZE {
            return Err(CoreError::DataLoad(format!(
                "expected {CATALOG_SIZE} hexagrams, found {}",
                entries.len()
            )));
        }
        entries.sort_by_key(|entry| entry.number);

        let mut by_signature = HashMap::with_capacity(CATALOG_SIZE);
        let mut by_number = HashMap::with_capacity(CATALOG_SIZE);
        let mut by_name_lower = HashMap::with_capacity(CATALOG_SIZE);

        for (index, entry) in entries.iter().enumerate() {
            if !(1..=64).contains(&entry.number) {
                return Err(CoreError::DataLoad(format!(
                    "hexagram number {} is out of range",
                    entry.number
                )));
            }
            if entry.name.trim().is_empty() {
                return Err(CoreError::DataLoad(format!(
                    "hexagram {} has an empty name",
                    entry.number
                )));
            }
            if entry.line_texts.len() != 6 {
                return Err(CoreError::DataLoad(format!(
                    "hexagram {} has {} line texts, expected 6",
                    entry.number,
                    entry.line_texts.len()
                )));
            }
            if by_number.insert(entry.number, index).is_some() {
                return Err(CoreError::DataLoad(format!(
                    "duplicate hexagram number {}",
                    entry.number
                )));
            }
            if by_signature.insert(entry.binary, index).is_some() {
                return Err(CoreError::DataLoad(format!(
                    "duplicate signature {}",
                    entry.binary
                )));
            }
            if by_name_lower.insert(entry.name.to_lowercase(), index).is_some() {
                return Err(CoreError::DataLoad(format!(
                    "duplicate hexagram name \"{}\"",
                    entry.name
                )));
            }
        }

        // 64 distinct numbers within 1..=64 leave no gaps, and 64 distinct
        // six-bit signatures cover every possible one.
        Ok(Self {
            entries,
            by_signature,
            by_number,
            by_name_lower,
        })
    }

    /// The entry keyed by `signature`.
    ///
    /// A miss against a validated catalog means the caller derived the
    /// signature outside the casting pipeline; it is reported, not masked.
    pub fn lookup_by_signature(&self, signature: Signature) -> CoreResult<&CatalogEntry> {
        self.by_signature
            .get(&signature)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| CoreError::HexagramNotFound(format!("signature \"{signature}\"")))
    }

    /// The entry with King Wen number `number`.
    pub fn lookup_by_number(&self, number: u8) -> CoreResult<&CatalogEntry> {
        self.by_number
            .get(&number)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| CoreError::HexagramNotFound(format!("number {number}")))
    }

    /// The entry called `name`, compared case-insensitively.
    pub fn lookup_by_name(&self, name: &str) -> CoreResult<&CatalogEntry> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .map(|&index| &self.entries[index])
            .ok_or_else(|| CoreError::HexagramNotFound(format!("name \"{name}\"")))
    }

    /// All 64 entries, ordered by number.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

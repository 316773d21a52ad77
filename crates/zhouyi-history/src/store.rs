//! The file-backed history store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use zhouyi_core::CastingResult;

use crate::error::{HistoryError, HistoryResult};
use crate::record::{HistoryEntry, RecordId};

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    records: Vec<HistoryEntry>,
}

/// Append-only log of past castings over a caller-supplied JSON file.
///
/// The store never hard-codes its location; where the history lives is the
/// caller's decision. An absent file reads as an empty history. A corrupt
/// file surfaces as [`HistoryError::Load`] on every operation that reads
/// it, appends included; existing data is never silently reset.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store over the file at `path`. The file itself is only
    /// touched by the individual operations.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a new record derived from `result` and returns its id.
    ///
    /// The id is a fresh UUID, checked against every id already in the
    /// file so it stays unique across restarts. The write goes through a
    /// temporary file in the same directory which then replaces the
    /// backing file, so a crash mid-append never corrupts committed
    /// records. A failed append leaves the already-produced casting result
    /// untouched; casting stays usable without history.
    pub fn append(&self, result: &CastingResult) -> HistoryResult<RecordId> {
        let mut file = self.read_file()?;

        let mut id = RecordId::new();
        while file.records.iter().any(|record| record.id == id) {
            id = RecordId::new();
        }
        file.records.push(HistoryEntry::from_result(id, result));

        self.write_file(&file)?;
        Ok(id)
    }

    /// Every record, most recent first.
    ///
    /// The order is guaranteed: creation time descending, with records
    /// sharing a timestamp kept in file (append) order.
    pub fn list_all(&self) -> HistoryResult<Vec<HistoryEntry>> {
        let mut records = self.read_file()?.records;
        records.sort_by_key(|record| std::cmp::Reverse(record.timestamp));
        Ok(records)
    }

    /// The record with id `id`.
    pub fn get_by_id(&self, id: RecordId) -> HistoryResult<HistoryEntry> {
        self.read_file()?
            .records
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(HistoryError::RecordNotFound(id))
    }

    /// Records whose question or hexagram names (original and resulting)
    /// contain `keyword` as a case-insensitive substring, in
    /// [`list_all`](Self::list_all) order.
    ///
    /// An empty or whitespace-only keyword matches nothing.
    pub fn search(&self, keyword: &str) -> HistoryResult<Vec<HistoryEntry>> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = self.list_all()?;
        records.retain(|record| {
            record.question.to_lowercase().contains(&keyword)
                || record.original.name.to_lowercase().contains(&keyword)
                || record
                    .resulting
                    .as_ref()
                    .is_some_and(|resulting| resulting.name.to_lowercase().contains(&keyword))
        });
        Ok(records)
    }

    fn read_file(&self) -> HistoryResult<HistoryFile> {
        if !self.path.exists() {
            return Ok(HistoryFile::default());
        }
        let text = fs::read_to_string(&self.path)
            .map_err(|e| HistoryError::Load(format!("cannot read {}: {e}", self.path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| HistoryError::Load(format!("{}: {e}", self.path.display())))
    }

    fn write_file(&self, file: &HistoryFile) -> HistoryResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| {
                    HistoryError::Write(format!("cannot create {}: {e}", parent.display()))
                })?;
                parent
            }
            _ => Path::new("."),
        };

        let write_err =
            |e: &dyn std::fmt::Display| HistoryError::Write(format!("{}: {e}", self.path.display()));

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_err(&e))?;
        let text = serde_json::to_string_pretty(file).map_err(|e| write_err(&e))?;
        temp.write_all(text.as_bytes()).map_err(|e| write_err(&e))?;
        temp.persist(&self.path).map_err(|e| write_err(&e))?;
        Ok(())
    }
}

//! Persisted casting records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zhouyi_core::CastingResult;

/// Unique identifier of a history record.
///
/// Assigned once at append time and stable forever. Displays and parses as
/// a hyphenated UUID, so an id printed by one run can be looked up by the
/// next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight characters of the id, for compact display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Name and signature of one hexagram, as stored in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRef {
    /// Catalog name of the hexagram.
    pub name: String,
    /// Its six-character signature.
    pub signature: String,
}

/// One persisted casting.
///
/// A reduced copy of a [`CastingResult`]: the question, the timestamp, and
/// the name/signature of each hexagram involved. Records are created only
/// by store appends and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The record's unique id.
    pub id: RecordId,
    /// The question put to the oracle; may be empty.
    pub question: String,
    /// When the casting was performed.
    pub timestamp: DateTime<Utc>,
    /// The hexagram as cast.
    pub original: HexagramRef,
    /// The settled hexagram, present only when a line changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting: Option<HexagramRef>,
}

impl HistoryEntry {
    /// Derives a record with id `id` from a casting result.
    pub fn from_result(id: RecordId, result: &CastingResult) -> Self {
        Self {
            id,
            question: result.question.clone(),
            timestamp: result.timestamp,
            original: HexagramRef {
                name: result.original.entry.name.clone(),
                signature: result.original.hexagram.signature().to_string(),
            },
            resulting: result.resulting.as_ref().map(|reading| HexagramRef {
                name: reading.entry.name.clone(),
                signature: reading.hexagram.signature().to_string(),
            }),
        }
    }

    /// One-line summary: the original name, then `→ resulting` if a line
    /// changed. Derived at display time, never persisted.
    pub fn summary(&self) -> String {
        match &self.resulting {
            Some(resulting) => format!("{} → {}", self.original.name, resulting.name),
            None => self.original.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use zhouyi_core::{Catalog, CastingResult, Hexagram, HexagramReading, LineValue, resolve};

    use super::*;

    fn creative_with_changing_top() -> CastingResult {
        let catalog = Catalog::bundled().unwrap();
        let hexagram = Hexagram::from_values([
            LineValue::YoungYang,
            LineValue::YoungYang,
            LineValue::YoungYang,
            LineValue::YoungYang,
            LineValue::YoungYang,
            LineValue::OldYang,
        ]);
        let entry = catalog.lookup_by_signature(hexagram.signature()).unwrap().clone();
        let resolution = resolve(&hexagram);
        let settled = resolution.resulting.unwrap();
        let settled_entry = catalog.lookup_by_signature(settled.signature()).unwrap().clone();
        CastingResult {
            question: "Should I travel north?".to_string(),
            timestamp: Utc::now(),
            original: HexagramReading { hexagram, entry },
            changing_lines: resolution.changing_lines,
            resulting: Some(HexagramReading {
                hexagram: settled,
                entry: settled_entry,
            }),
        }
    }

    #[test]
    fn record_ids_round_trip_through_display_and_parse() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn the_short_form_prefixes_the_full_id() {
        let id = RecordId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().starts_with(&short));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!("not-a-uuid".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn entries_copy_the_result_fields() {
        let result = creative_with_changing_top();
        let id = RecordId::new();
        let entry = HistoryEntry::from_result(id, &result);

        assert_eq!(entry.id, id);
        assert_eq!(entry.question, result.question);
        assert_eq!(entry.timestamp, result.timestamp);
        assert_eq!(entry.original.name, "Qian (The Creative)");
        assert_eq!(entry.original.signature, "111111");
        let resulting = entry.resulting.expect("the top line changed");
        assert_eq!(resulting.name, "Gou (Coming to Meet)");
        assert_eq!(resulting.signature, "111110");
    }

    #[test]
    fn summary_joins_original_and_resulting_names() {
        let result = creative_with_changing_top();
        let entry = HistoryEntry::from_result(RecordId::new(), &result);
        assert_eq!(
            entry.summary(),
            "Qian (The Creative) → Gou (Coming to Meet)"
        );

        let stable = HistoryEntry {
            resulting: None,
            ..entry
        };
        assert_eq!(stable.summary(), "Qian (The Creative)");
    }

    #[test]
    fn entries_without_a_resulting_hexagram_omit_the_field() {
        let result = creative_with_changing_top();
        let mut entry = HistoryEntry::from_result(RecordId::new(), &result);
        entry.resulting = None;
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("resulting"));
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn entries_round_trip_through_serde() {
        let result = creative_with_changing_top();
        let entry = HistoryEntry::from_result(RecordId::new(), &result);
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}

//! File-backed persistence for Zhouyi castings.
//!
//! A [`HistoryStore`] keeps an append-only log of past castings in a JSON
//! file whose location the caller supplies. Appends are atomic with respect
//! to process crash, every record gets a unique stable id, and the log can
//! be listed, fetched by id, or searched by keyword. History failures are
//! deliberately separate from casting failures: a broken history file never
//! prevents a casting.

/// Error types for history operations.
pub mod error;
/// Record ids and persisted entries.
pub mod record;
/// The file-backed store.
pub mod store;

/// Re-export error types.
pub use error::{HistoryError, HistoryResult};
/// Re-export record types.
pub use record::{HexagramRef, HistoryEntry, RecordId};
/// Re-export the store.
pub use store::HistoryStore;

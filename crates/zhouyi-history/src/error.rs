use crate::record::RecordId;

/// Alias for `Result<T, HistoryError>`.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors that can occur when reading or writing the history file.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// The history file exists but cannot be read or parsed.
    #[error("history file is corrupt or unreadable: {0}")]
    Load(String),

    /// The history file could not be written.
    #[error("cannot write history: {0}")]
    Write(String),

    /// The requested record ID does not exist in the history.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
}

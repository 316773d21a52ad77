//! Error types for the casting engine.

use thiserror::Error;

/// Result alias for casting-engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading the catalog or resolving a casting.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog source is missing, unreadable, or fails validation.
    /// Fatal: no casting is possible without a valid catalog.
    #[error("cannot load hexagram catalog: {0}")]
    DataLoad(String),

    /// A signature, number, or name matched no catalog entry. Against a
    /// validated catalog a signature miss means an internal fault, so this
    /// is always surfaced, never swallowed.
    #[error("hexagram not found: {0}")]
    HexagramNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let load = CoreError::DataLoad("expected 64 hexagrams, found 63".to_string());
        assert_eq!(
            load.to_string(),
            "cannot load hexagram catalog: expected 64 hexagrams, found 63"
        );

        let missing = CoreError::HexagramNotFound("number 65".to_string());
        assert_eq!(missing.to_string(), "hexagram not found: number 65");
    }
}

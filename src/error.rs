// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// An entity kind was asked for file-backed data it has no layout entry for.
    #[error("Misconfiguration: {0}")]
    Misconfiguration(String),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Cannot find object with id {id}")]
    ObjectNotFound { id: u64 },

    /// The index points at a shard that does not contain the record.
    #[error("Cannot find meta for division #{id}")]
    MissingMeta { id: u64 },

    #[error("Corrupted data in {}: {source}", path.display())]
    DataCorruption {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("File operation failed for {}: {source}", path.display())]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Field {0} does not exist")]
    UnknownField(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    /// True for both "never indexed" and "index/shard mismatch" lookups.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::ObjectNotFound { .. } | RepositoryError::MissingMeta { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_are_distinct() {
        let never_indexed = RepositoryError::ObjectNotFound { id: 2017370 };
        let desynced = RepositoryError::MissingMeta { id: 2017370 };

        assert!(never_indexed.is_not_found());
        assert!(desynced.is_not_found());
        assert_eq!(
            never_indexed.to_string(),
            "Cannot find object with id 2017370"
        );
        assert_eq!(
            desynced.to_string(),
            "Cannot find meta for division #2017370"
        );
        assert!(!RepositoryError::Misconfiguration("city".to_string()).is_not_found());
    }
}

//! Catalog error types
//!
//! Load failures reject the whole catalog. The session layer catches
//! them and proceeds on an empty set; nothing downstream of load can
//! fail.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading or constructing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON or does not match the wire shape
    #[error("malformed catalog file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an id
    #[error("duplicate document id {0}")]
    DuplicateId(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = CatalogError::DuplicateId(42);
        assert_eq!(format!("{}", err), "duplicate document id 42");
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error;

        let err = CatalogError::Read {
            path: PathBuf::from("data/documents.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("data/documents.json"));
    }
}

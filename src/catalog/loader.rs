//! Catalog loader
//!
//! Reads the catalog JSON from a fixed path, once, at session start.
//! This is the only asynchronous boundary in the crate; everything
//! downstream operates on the in-memory set synchronously.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::document::Document;
use super::errors::{CatalogError, CatalogResult};
use super::set::Catalog;

/// Wire shape of the catalog file: `{ "documents": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub documents: Vec<Document>,
}

/// Loads the document catalog from disk.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Creates a loader for the given catalog file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the catalog.
    ///
    /// Any failure (unreadable file, malformed JSON, duplicate ids)
    /// rejects the whole load; the caller decides whether to proceed
    /// on an empty set.
    pub async fn load(&self) -> CatalogResult<Catalog> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;

        let file: CatalogFile =
            serde_json::from_slice(&raw).map_err(|source| CatalogError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Catalog::new(file.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_valid_catalog() {
        let file = write_catalog(
            r#"{
                "documents": [
                    {
                        "id": 1,
                        "titulo": "Historia del Arte",
                        "autor": "Luis Gómez",
                        "categoria": "Arte",
                        "descripcion": "Panorama general",
                        "fecha": "2019-05-02",
                        "tamaño_mb": 12.5,
                        "enlace_gdrive": "https://drive.example/1"
                    }
                ]
            }"#,
        );

        let catalog = CatalogLoader::new(file.path()).load().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).map(|d| d.title.as_str()), Some("Historia del Arte"));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let loader = CatalogLoader::new("/nonexistent/documents.json");
        let result = loader.load().await;
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let file = write_catalog("{ not json");
        let result = CatalogLoader::new(file.path()).load().await;
        assert!(matches!(result, Err(CatalogError::Malformed { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_ids_reject_whole_load() {
        let file = write_catalog(
            r#"{
                "documents": [
                    {"id": 1, "titulo": "A", "autor": "X", "categoria": "C",
                     "descripcion": "d", "fecha": "2020-01-01", "tamaño_mb": 1.0,
                     "enlace_gdrive": "https://drive.example/a"},
                    {"id": 1, "titulo": "B", "autor": "Y", "categoria": "C",
                     "descripcion": "d", "fecha": "2020-01-02", "tamaño_mb": 2.0,
                     "enlace_gdrive": "https://drive.example/b"}
                ]
            }"#,
        );

        let result = CatalogLoader::new(file.path()).load().await;
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }
}

//! Session configuration
//!
//! Constructed by the caller; no config file parsing.

use std::path::PathBuf;

use crate::page::DEFAULT_PAGE_SIZE;

/// Configuration for a browser session.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Path of the catalog JSON file
    pub catalog_path: PathBuf,
    /// Documents shown per page
    pub page_size: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/documents.json"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowserConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the catalog file path.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Overrides the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

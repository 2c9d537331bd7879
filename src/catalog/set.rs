//! The immutable catalog set
//!
//! Holds the loaded documents in load order plus an id → position map
//! for detail lookups. Construction rejects duplicate ids; after that
//! the set only hands out shared references.

use std::collections::HashMap;

use super::document::Document;
use super::errors::{CatalogError, CatalogResult};

/// An immutable set of document records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    documents: Vec<Document>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    /// Builds a catalog from loaded records.
    ///
    /// Fails if two records share an id.
    pub fn new(documents: Vec<Document>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if by_id.insert(doc.id, position).is_some() {
                return Err(CatalogError::DuplicateId(doc.id));
            }
        }
        Ok(Self { documents, by_id })
    }

    /// An empty catalog, used when the load fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All documents in load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Looks up a document by id for the detail view.
    pub fn get(&self, id: u64) -> Option<&Document> {
        self.by_id.get(&id).map(|&position| &self.documents[position])
    }

    /// Number of documents in the set.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the catalog holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Distinct category values, sorted, for a category selector.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .documents
            .iter()
            .map(|doc| doc.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

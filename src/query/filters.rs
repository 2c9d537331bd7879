//! Criterion matching for the query pipeline
//!
//! Narrows documents strictly according to the filter specification.
//! Text criteria use case-insensitive substring containment; category
//! and date use exact equality. Absent optional fields never match and
//! never raise.

use crate::catalog::Document;

use super::spec::FilterSpec;

/// Evaluates the filter specification against documents
pub struct SpecFilter;

impl SpecFilter {
    /// Checks if a document passes every present criterion (AND semantics).
    pub fn matches(document: &Document, spec: &FilterSpec) -> bool {
        if let Some(term) = &spec.search {
            if !Self::matches_search(document, term) {
                return false;
            }
        }

        if let Some(category) = &spec.category {
            if document.category != *category {
                return false;
            }
        }

        if let Some(author) = &spec.author {
            if !Self::contains_ci(&document.author, author) {
                return false;
            }
        }

        if let Some(date) = &spec.date {
            if document.date != *date {
                return false;
            }
        }

        true
    }

    /// A document passes the search-term criterion if ANY searchable
    /// field contains the term as a case-insensitive substring.
    fn matches_search(document: &Document, term: &str) -> bool {
        let needle = term.to_lowercase();
        document
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring containment.
    fn contains_ci(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

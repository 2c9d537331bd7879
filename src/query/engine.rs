//! Query engine
//!
//! The filter → sort pipeline. Pure: same documents + same spec =
//! same result, and the input list is never mutated.

use crate::catalog::Document;

use super::filters::SpecFilter;
use super::result::QueryResult;
use super::sorter::ResultSorter;
use super::spec::FilterSpec;

/// Applies a filter specification to a document list
pub struct QueryEngine;

impl QueryEngine {
    /// Runs the full pipeline and returns a new ordered result.
    ///
    /// With an empty specification the result is the input list in
    /// input order.
    pub fn apply(documents: &[Document], spec: &FilterSpec) -> QueryResult {
        let mut matched: Vec<Document> = documents
            .iter()
            .filter(|doc| SpecFilter::matches(doc, spec))
            .cloned()
            .collect();

        if let Some(key) = spec.sort {
            ResultSorter::sort(&mut matched, key);
        }

        QueryResult {
            documents: matched,
            total_count: documents.len(),
        }
    }
}

//! Query subsystem for biblio
//!
//! Turns the full document list plus a filter specification into an
//! ordered result list. The pipeline is pure and re-evaluated in full
//! on every specification change.
//!
//! # Pipeline (strict order)
//!
//! 1. Narrow by each present criterion (search term, category, author,
//!    date) with AND semantics
//! 2. Apply sort (if specified); absent sort preserves input order
//! 3. Return a new ordered sequence plus summary counts
//!
//! # Invariants
//!
//! - The input list is never mutated
//! - Every operation is total: absent or malformed optional fields are
//!   "does not match", never an error
//! - Sorting is stable and deterministic

mod engine;
mod filters;
mod result;
mod sorter;
mod spec;

pub use engine::QueryEngine;
pub use filters::SpecFilter;
pub use result::QueryResult;
pub use sorter::ResultSorter;
pub use spec::{FilterSpec, SortKey};

//! Catalog subsystem for biblio
//!
//! Owns the document record model, the immutable in-memory catalog set,
//! and the one-time JSON loader.
//!
//! # Invariants
//!
//! - Document ids are unique across the loaded set
//! - The set is never mutated after load
//! - A failed or malformed load rejects the whole catalog; the caller
//!   decides whether to proceed on an empty set

mod document;
mod errors;
mod loader;
mod set;

pub use document::Document;
pub use errors::{CatalogError, CatalogResult};
pub use loader::{CatalogFile, CatalogLoader};
pub use set::Catalog;

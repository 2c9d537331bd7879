//! Pagination subsystem for biblio
//!
//! Slices ordered results into fixed-size pages and describes the
//! pagination controls (page tokens, ellipses, prev/next availability)
//! for the presentation layer.
//!
//! # Invariants
//!
//! - Pages are 1-based
//! - An out-of-range page yields an empty slice, never an error
//! - `total_pages = ceil(count / page_size)`; zero or one page means
//!   no pagination controls

mod paginator;
mod window;

pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
pub use window::{PageToken, PaginationWindow};

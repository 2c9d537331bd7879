//! Session subsystem for biblio
//!
//! The explicit browser-session object that ties the catalog, the
//! filter specification, and the view state together, and the contract
//! the presentation layer consumes: the current page slice, summary
//! counts, a detail lookup, the pagination window, and transient
//! notices.
//!
//! # Invariants
//!
//! - `current_page` resets to 1 whenever any filter field changes
//! - The pipeline re-runs in full, synchronously, on every change
//! - A failed catalog load leaves the session serving an empty set

mod config;
mod notices;
mod state;

pub use config::BrowserConfig;
pub use notices::{Notice, NoticeKind};
pub use state::{BrowserSession, PageView, Stats};

//! Lifecycle events
//!
//! Every observable event in the browser session lifecycle, explicit
//! and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events during a browser session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Catalog load begins
    CatalogLoadBegin,
    /// Catalog loaded and validated
    CatalogLoaded,
    /// Catalog load failed; session proceeds on an empty set
    CatalogLoadFailed,
    /// Session ready to serve views
    SessionReady,

    // Query processing
    /// Filter pipeline re-evaluated
    QueryComplete,
    /// Filters reset to defaults
    FiltersCleared,

    // Paging
    /// Current page changed
    PageChanged,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CatalogLoadBegin => "CATALOG_LOAD_BEGIN",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogLoadFailed => "CATALOG_LOAD_FAILED",
            Event::SessionReady => "SESSION_READY",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::FiltersCleared => "FILTERS_CLEARED",
            Event::PageChanged => "PAGE_CHANGED",
        }
    }

    /// Natural severity of the event. A failed load is an error, not
    /// fatal: the session recovers on an empty catalog.
    pub fn severity(&self) -> Severity {
        match self {
            Event::CatalogLoadFailed => Severity::Error,
            Event::PageChanged => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

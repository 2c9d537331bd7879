//! Observability subsystem for biblio
//!
//! Structured JSON logging and typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only: logging never affects engine behavior
//! 2. Synchronous, unbuffered, one line per event
//! 3. Deterministic output (alphabetical field ordering)

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Logs a lifecycle event at its natural severity.
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Logs a lifecycle event with additional context fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_no_panic() {
        log_event(Event::SessionReady);
        log_event(Event::CatalogLoadFailed);
    }

    #[test]
    fn test_log_event_with_fields_no_panic() {
        log_event_with_fields(Event::CatalogLoaded, &[("documents", "42")]);
    }
}

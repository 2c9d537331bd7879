//! Browser session state
//!
//! An explicit session object constructed with the document list and
//! filter state; no ambient singleton. Every filter change re-runs the
//! full pipeline synchronously and resets the view to page 1.

use std::collections::VecDeque;

use crate::catalog::{Catalog, CatalogLoader, Document};
use crate::highlight::Highlighter;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::page::{Paginator, PaginationWindow};
use crate::query::{FilterSpec, QueryEngine, QueryResult, SortKey};

use super::config::BrowserConfig;
use super::notices::Notice;

/// Summary counts for the results line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Documents that passed the filters
    pub filtered: usize,
    /// Documents in the whole catalog
    pub total: usize,
    /// Active search term, if any
    pub search_term: Option<String>,
}

/// One renderable view of the results.
#[derive(Debug)]
pub struct PageView<'a> {
    /// The documents of the current page, in result order
    pub documents: &'a [Document],
    /// Pagination controls for this view
    pub window: PaginationWindow,
    /// Summary counts
    pub stats: Stats,
}

/// A browser session over one loaded catalog.
#[derive(Debug)]
pub struct BrowserSession {
    catalog: Catalog,
    spec: FilterSpec,
    results: QueryResult,
    current_page: usize,
    paginator: Paginator,
    notices: VecDeque<Notice>,
}

impl BrowserSession {
    /// Opens a session: loads the catalog once, then serves views.
    ///
    /// A failed or malformed load never fails the session; it is
    /// logged, surfaced as an error notice, and the session proceeds
    /// on an empty catalog.
    pub async fn open(config: BrowserConfig) -> Self {
        log_event(Event::CatalogLoadBegin);

        let loader = CatalogLoader::new(&config.catalog_path);
        let (catalog, load_notice) = match loader.load().await {
            Ok(catalog) => {
                log_event_with_fields(
                    Event::CatalogLoaded,
                    &[("documents", &catalog.len().to_string())],
                );
                (catalog, None)
            }
            Err(error) => {
                log_event_with_fields(Event::CatalogLoadFailed, &[("error", &error.to_string())]);
                let notice =
                    Notice::error("The document catalog could not be loaded; nothing to browse");
                (Catalog::empty(), Some(notice))
            }
        };

        let mut session = Self::with_catalog(catalog, &config);
        if let Some(notice) = load_notice {
            session.notices.push_back(notice);
        }
        session
    }

    /// Builds a session over an already-loaded catalog.
    pub fn with_catalog(catalog: Catalog, config: &BrowserConfig) -> Self {
        let spec = FilterSpec::new();
        let results = QueryEngine::apply(catalog.documents(), &spec);

        log_event(Event::SessionReady);

        Self {
            catalog,
            spec,
            results,
            current_page: 1,
            paginator: Paginator::new(config.page_size),
            notices: VecDeque::new(),
        }
    }

    // ------------------------------------------------------------------
    // Filter controls: each re-runs the pipeline and resets to page 1
    // ------------------------------------------------------------------

    /// Updates the general search term. Empty input clears it.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.spec.search = Self::normalize(term.into());
        self.refresh();
    }

    /// Updates the exact-match category filter. Empty input clears it.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.spec.category = Self::normalize(category.into());
        self.refresh();
    }

    /// Updates the author substring filter. Empty input clears it.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.spec.author = Self::normalize(author.into());
        self.refresh();
    }

    /// Updates the exact-match date filter. Empty input clears it.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.spec.date = Self::normalize(date.into());
        self.refresh();
    }

    /// Updates the sort ordering.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.spec.sort = Some(sort);
        self.refresh();
    }

    /// Clears every filter and restores the default title-ascending
    /// ordering over the full catalog.
    pub fn clear_filters(&mut self) {
        self.spec = FilterSpec::new().with_sort(SortKey::default());
        self.refresh();

        log_event(Event::FiltersCleared);
        self.notices.push_back(Notice::info("Filters cleared"));
    }

    /// Moves to a 1-based page. Out-of-range pages render empty rather
    /// than failing.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
        log_event_with_fields(Event::PageChanged, &[("page", &self.current_page.to_string())]);
    }

    // ------------------------------------------------------------------
    // Presentation-layer contract
    // ------------------------------------------------------------------

    /// The current view: page slice, pagination window, summary counts.
    pub fn page(&self) -> PageView<'_> {
        let total_pages = self.paginator.total_pages(self.results.len());
        PageView {
            documents: self.paginator.slice(&self.results.documents, self.current_page),
            window: PaginationWindow::build(self.current_page, total_pages),
            stats: self.stats(),
        }
    }

    /// Summary counts for the results line.
    pub fn stats(&self) -> Stats {
        Stats {
            filtered: self.results.filtered_count(),
            total: self.results.total_count,
            search_term: self.spec.search.clone(),
        }
    }

    /// Detail-view lookup by document id.
    pub fn document(&self, id: u64) -> Option<&Document> {
        self.catalog.get(id)
    }

    /// Marks occurrences of the active search term in result text.
    /// With no active term the text is returned unchanged.
    pub fn highlight(&self, text: &str) -> String {
        match &self.spec.search {
            Some(term) => Highlighter::mark(text, term),
            None => text.to_string(),
        }
    }

    /// Drains queued notices for the presentation layer to render.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active filter specification.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// The cached filtered/sorted results.
    pub fn results(&self) -> &QueryResult {
        &self.results
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    // ------------------------------------------------------------------

    /// Re-runs the pipeline after a specification change.
    fn refresh(&mut self) {
        self.results = QueryEngine::apply(self.catalog.documents(), &self.spec);
        self.current_page = 1;

        log_event_with_fields(
            Event::QueryComplete,
            &[
                ("filtered", &self.results.filtered_count().to_string()),
                ("total", &self.results.total_count.to_string()),
            ],
        );
    }

    /// Empty input means "no constraint".
    fn normalize(value: String) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

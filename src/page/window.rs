//! Pagination window policy
//!
//! Describes which page controls to render: the first and last page
//! are always shown, every page within distance 2 of the current page
//! is shown, and a page at distance exactly 3 collapses into an
//! ellipsis. Pages further out are omitted. The distance-3 rule
//! collapses only a single page on each side; that boundary arithmetic
//! is part of the contract and is preserved literally.

use serde::Serialize;

/// One rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    /// A navigable page number
    Page(usize),
    /// The current page (rendered inert)
    Current(usize),
    /// A collapsed single-page gap
    Ellipsis,
}

/// The pagination controls for one view of the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    /// Page tokens in render order; empty when one page or none
    pub tokens: Vec<PageToken>,
    /// Whether a "previous" control applies
    pub has_prev: bool,
    /// Whether a "next" control applies
    pub has_next: bool,
    /// The current 1-based page
    pub current: usize,
    /// Total number of pages
    pub total_pages: usize,
}

impl PaginationWindow {
    /// Builds the window for the given current page and page count.
    ///
    /// With zero or one page there is nothing to render.
    pub fn build(current: usize, total_pages: usize) -> Self {
        if total_pages <= 1 {
            return Self {
                tokens: Vec::new(),
                has_prev: false,
                has_next: false,
                current,
                total_pages,
            };
        }

        let mut tokens = Vec::new();
        for page in 1..=total_pages {
            let distance = page.abs_diff(current);
            if page == current {
                tokens.push(PageToken::Current(page));
            } else if page == 1 || page == total_pages || distance <= 2 {
                tokens.push(PageToken::Page(page));
            } else if distance == 3 {
                tokens.push(PageToken::Ellipsis);
            }
        }

        Self {
            tokens,
            has_prev: current > 1,
            has_next: current < total_pages,
            current,
            total_pages,
        }
    }
}

//! Pagination Window Tests
//!
//! The window policy is testable output: first and last page always
//! show, pages within distance 2 of the current page show, a page at
//! distance exactly 3 collapses to an ellipsis, anything further is
//! omitted. The single-page-gap boundary arithmetic is preserved
//! literally.

use biblio::page::{PageToken, PaginationWindow, Paginator};
use PageToken::{Current, Ellipsis, Page};

// =============================================================================
// Page Computation
// =============================================================================

/// 25 results at page size 10 yield 3 pages; page 3 holds exactly 5.
#[test]
fn test_three_pages_of_twentyfive() {
    let items: Vec<u32> = (0..25).collect();
    let paginator = Paginator::new(10);

    assert_eq!(paginator.total_pages(items.len()), 3);
    assert_eq!(paginator.slice(&items, 1).len(), 10);
    assert_eq!(paginator.slice(&items, 2).len(), 10);
    assert_eq!(paginator.slice(&items, 3).len(), 5);
    assert_eq!(paginator.slice(&items, 3), &items[20..]);
}

/// An out-of-range page is an empty slice, not an error.
#[test]
fn test_out_of_range_is_empty() {
    let items: Vec<u32> = (0..25).collect();
    let paginator = Paginator::new(10);
    assert!(paginator.slice(&items, 4).is_empty());
}

// =============================================================================
// Window Policy
// =============================================================================

/// Zero or one page: no controls at all.
#[test]
fn test_no_controls_for_single_page() {
    for total in [0, 1] {
        let window = PaginationWindow::build(1, total);
        assert!(window.tokens.is_empty());
        assert!(!window.has_prev);
        assert!(!window.has_next);
    }
}

/// All pages render when nothing is further than distance 2.
#[test]
fn test_dense_window() {
    let window = PaginationWindow::build(3, 5);
    assert_eq!(
        window.tokens,
        vec![Page(1), Page(2), Current(3), Page(4), Page(5)]
    );
}

/// From page 1 of 10: neighborhood, one ellipsis, then the last page.
#[test]
fn test_leading_window() {
    let window = PaginationWindow::build(1, 10);
    assert_eq!(
        window.tokens,
        vec![Current(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
    assert!(!window.has_prev);
    assert!(window.has_next);
}

/// A middle page of a long run gets an ellipsis on each side.
#[test]
fn test_middle_window_symmetric() {
    let window = PaginationWindow::build(6, 11);
    assert_eq!(
        window.tokens,
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Current(6),
            Page(7),
            Page(8),
            Ellipsis,
            Page(11),
        ]
    );
}

/// The distance-3 rule collapses exactly one page; wider gaps are
/// silently omitted rather than summarized.
#[test]
fn test_wide_gap_omitted_not_collapsed() {
    let window = PaginationWindow::build(10, 20);

    // Pages 2..=6 and 14..=19 produce nothing at all; only pages 7 and
    // 13 (distance 3) become ellipses.
    assert_eq!(
        window.tokens,
        vec![
            Page(1),
            Ellipsis,
            Page(8),
            Page(9),
            Current(10),
            Page(11),
            Page(12),
            Ellipsis,
            Page(20),
        ]
    );
}

/// First and last page always render as pages, even at distance 3.
#[test]
fn test_boundary_pages_beat_ellipsis() {
    let window = PaginationWindow::build(4, 7);
    assert_eq!(
        window.tokens,
        vec![
            Page(1),
            Page(2),
            Page(3),
            Current(4),
            Page(5),
            Page(6),
            Page(7),
        ]
    );

    let window = PaginationWindow::build(4, 8);
    assert_eq!(
        window.tokens,
        vec![
            Page(1),
            Page(2),
            Page(3),
            Current(4),
            Page(5),
            Page(6),
            Ellipsis,
            Page(8),
        ]
    );
}

/// Prev/next availability at the run's edges.
#[test]
fn test_prev_next_availability() {
    assert!(!PaginationWindow::build(1, 3).has_prev);
    assert!(PaginationWindow::build(1, 3).has_next);
    assert!(PaginationWindow::build(2, 3).has_prev);
    assert!(PaginationWindow::build(2, 3).has_next);
    assert!(PaginationWindow::build(3, 3).has_prev);
    assert!(!PaginationWindow::build(3, 3).has_next);
}

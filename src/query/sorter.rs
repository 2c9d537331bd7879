//! Result sorting for the query pipeline
//!
//! Sorts the narrowed list by the requested key. Text keys compare
//! case-insensitively with a byte-order tie-break; date keys compare
//! chronologically. Sort is stable and deterministic.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::catalog::Document;

use super::spec::SortKey;

/// Sorts filtered documents
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts documents in place according to the sort key.
    pub fn sort(documents: &mut [Document], key: SortKey) {
        match key {
            SortKey::TitleAsc => {
                documents.sort_by(|a, b| Self::compare_text(&a.title, &b.title));
            }
            SortKey::TitleDesc => {
                documents.sort_by(|a, b| Self::compare_text(&b.title, &a.title));
            }
            SortKey::DateNewest => {
                documents.sort_by(|a, b| {
                    Self::compare_dates(a.parsed_date(), b.parsed_date(), true)
                });
            }
            SortKey::DateOldest => {
                documents.sort_by(|a, b| {
                    Self::compare_dates(a.parsed_date(), b.parsed_date(), false)
                });
            }
            SortKey::AuthorAsc => {
                documents.sort_by(|a, b| Self::compare_text(&a.author, &b.author));
            }
        }
    }

    /// Case-insensitive text comparison with a deterministic tie-break
    /// on the original byte order.
    fn compare_text(a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }

    /// Chronological comparison. Unparseable dates order after
    /// parseable ones in both directions.
    fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, newest_first: bool) -> Ordering {
        match (a, b) {
            (Some(a_date), Some(b_date)) => {
                if newest_first {
                    b_date.cmp(&a_date)
                } else {
                    a_date.cmp(&b_date)
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

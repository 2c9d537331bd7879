//! Search-term highlighting for biblio
//!
//! Wraps every case-insensitive occurrence of the active search term
//! in an emphasis marker, preserving the original casing of each
//! matched substring. The term is escaped before matching, so regex
//! metacharacters match literally and never raise.

use regex::RegexBuilder;

/// Opening emphasis marker emitted around matches.
pub const MARK_OPEN: &str = "<mark>";
/// Closing emphasis marker emitted around matches.
pub const MARK_CLOSE: &str = "</mark>";

/// Marks search-term occurrences in result text
pub struct Highlighter;

impl Highlighter {
    /// Returns `text` with every occurrence of `term` wrapped in the
    /// emphasis markers.
    ///
    /// With an empty term the text is returned unchanged. Total
    /// function: nothing the user can type makes it fail.
    pub fn mark(text: &str, term: &str) -> String {
        if term.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let pattern = regex::escape(term);
        let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(matcher) => matcher,
            // An escaped literal always compiles; fall back to the
            // unmarked text rather than propagate
            Err(_) => return text.to_string(),
        };

        matcher
            .replace_all(text, format!("{}{}{}", MARK_OPEN, "${0}", MARK_CLOSE).as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_match_preserving_case() {
        assert_eq!(
            Highlighter::mark("Data Structures", "data"),
            "<mark>Data</mark> Structures"
        );
    }

    #[test]
    fn test_all_occurrences_marked() {
        assert_eq!(
            Highlighter::mark("ada and Ada", "ada"),
            "<mark>ada</mark> and <mark>Ada</mark>"
        );
    }

    #[test]
    fn test_empty_term_unchanged() {
        assert_eq!(Highlighter::mark("Data Structures", ""), "Data Structures");
    }

    #[test]
    fn test_no_match_unchanged() {
        assert_eq!(Highlighter::mark("Data Structures", "xyz"), "Data Structures");
    }

    #[test]
    fn test_metacharacters_match_literally() {
        assert_eq!(
            Highlighter::mark("Programming in C++ today", "C++"),
            "Programming in <mark>C++</mark> today"
        );
        // A bare metacharacter term must not panic either
        assert_eq!(Highlighter::mark("a.b", "."), "a<mark>.</mark>b");
    }

    #[test]
    fn test_unicode_case_insensitive() {
        assert_eq!(
            Highlighter::mark("Cálculo básico", "CÁLCULO"),
            "<mark>Cálculo</mark> básico"
        );
    }
}

//! Filter specification
//!
//! The parsed representation of the active filter controls. All fields
//! are optional; an absent field means "no constraint".

use serde::{Deserialize, Serialize};

/// Sort orderings offered by the sort selector.
///
/// Wire names match the selector values of the catalog UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Title A→Z
    #[serde(rename = "titulo_asc")]
    TitleAsc,

    /// Title Z→A
    #[serde(rename = "titulo_desc")]
    TitleDesc,

    /// Most recent date first
    #[serde(rename = "fecha_reciente")]
    DateNewest,

    /// Oldest date first
    #[serde(rename = "fecha_antiguo")]
    DateOldest,

    /// Author A→Z
    #[serde(rename = "autor_asc")]
    AuthorAsc,
}

impl SortKey {
    /// Returns the wire name of the sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "titulo_asc",
            SortKey::TitleDesc => "titulo_desc",
            SortKey::DateNewest => "fecha_reciente",
            SortKey::DateOldest => "fecha_antiguo",
            SortKey::AuthorAsc => "autor_asc",
        }
    }

    /// Parses a wire name back into a sort key.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "titulo_asc" => Some(SortKey::TitleAsc),
            "titulo_desc" => Some(SortKey::TitleDesc),
            "fecha_reciente" => Some(SortKey::DateNewest),
            "fecha_antiguo" => Some(SortKey::DateOldest),
            "autor_asc" => Some(SortKey::AuthorAsc),
            _ => None,
        }
    }
}

impl Default for SortKey {
    /// The default ordering restored when filters are cleared.
    fn default() -> Self {
        SortKey::TitleAsc
    }
}

/// The active filter specification, one per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// General search term, matched case-insensitively as a substring
    /// against every searchable field
    pub search: Option<String>,

    /// Exact-match category
    pub category: Option<String>,

    /// Case-insensitive author substring
    pub author: Option<String>,

    /// Exact-match date string
    pub date: Option<String>,

    /// Requested ordering; absent preserves filter order
    pub sort: Option<SortKey>,
}

impl FilterSpec {
    /// Creates an empty specification (no constraints, no ordering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the exact-match category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the author substring.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the exact-match date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the sort ordering.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Returns true if no filter criterion is active (sort aside).
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.date.is_none()
    }
}

//! Document record model
//!
//! A document record is immutable once loaded. Field names on the wire
//! are in the catalog's source locale and map 1:1 onto the semantic
//! fields here via serde renames.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single document record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier across the loaded set
    pub id: u64,

    /// Document title
    #[serde(rename = "titulo")]
    pub title: String,

    /// Author name
    #[serde(rename = "autor")]
    pub author: String,

    /// Category (exact-match filter key)
    #[serde(rename = "categoria")]
    pub category: String,

    /// Free-text description
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Calendar date as an ISO `YYYY-MM-DD` string
    #[serde(rename = "fecha")]
    pub date: String,

    /// File size in megabytes
    #[serde(rename = "tamaño_mb")]
    pub size_mb: f64,

    /// Source organization, if known
    #[serde(rename = "fuente", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// ISBN, if the document has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Ordered keyword tags; absent on the wire means empty
    #[serde(rename = "palabras_clave", default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// URI to the external document
    #[serde(rename = "enlace_gdrive")]
    pub link: String,
}

impl Document {
    /// Parses the record's date field as a calendar date.
    ///
    /// Returns `None` for malformed dates; callers treat that as
    /// "orders after every parseable date", never as an error.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The text fields a general search term is matched against:
    /// title, author, category, description, source, isbn, keywords.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            Some(self.author.as_str()),
            Some(self.category.as_str()),
            Some(self.description.as_str()),
            self.source.as_deref(),
            self.isbn.as_deref(),
        ]
        .into_iter()
        .flatten()
        .chain(self.keywords.iter().map(String::as_str))
    }
}

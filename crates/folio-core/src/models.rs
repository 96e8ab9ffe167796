//! Core data models used throughout Folio.
//!
//! These types represent the project records a catalog is built from, the
//! query the presentation layer issues on every change, and the ordered
//! result a query produces.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Sentinel category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// A single portfolio project.
///
/// Records are immutable once a catalog has been built from them. Only
/// `category`, `title`, `description` and `tags` take part in matching;
/// the remaining fields are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique within a catalog, stable for the session.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Display order matters (renderers truncate from the end).
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub year: String,
}

/// The category half of a [`FilterQuery`].
///
/// The literal string `"All"` converts to [`CategoryFilter::All`]; any other
/// string is a named category compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A category selection plus raw search text.
///
/// Recreated on every input event; `term` is kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterQuery {
    pub category: CategoryFilter,
    pub term: String,
}

impl FilterQuery {
    pub fn new(category: impl Into<CategoryFilter>, term: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            term: term.into(),
        }
    }

    /// True when the term contains anything besides whitespace.
    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }
}

/// Ordered subsequence of a catalog.
///
/// Entries share their allocation with the catalog they came from, so
/// `Arc::ptr_eq` identifies the catalog entry behind each result entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterResult {
    records: Vec<Arc<ProjectRecord>>,
}

impl FilterResult {
    pub(crate) fn from_records(records: Vec<Arc<ProjectRecord>>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Arc<ProjectRecord>] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ProjectRecord>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_literal_parses_to_sentinel() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("all"),
            CategoryFilter::Named("all".to_string())
        );
        assert_eq!(CategoryFilter::from("Branding".to_string()).as_str(), "Branding");
    }

    #[test]
    fn test_has_term_ignores_whitespace() {
        assert!(!FilterQuery::new("All", "").has_term());
        assert!(!FilterQuery::new("All", "  \t ").has_term());
        assert!(FilterQuery::new("All", " ui ").has_term());
    }

    #[test]
    fn test_record_optional_fields_default() {
        let json = r#"{"id": 7, "title": "T", "description": "D", "category": "C"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
        assert!(!record.featured);
        assert_eq!(record.year, "");
    }

    #[test]
    fn test_query_serializes_category_as_string() {
        let query = FilterQuery::new("Web Design", "shop");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["category"], "Web Design");
        assert_eq!(value["term"], "shop");
    }
}

//! Category + free-text matching over a [`Catalog`].
//!
//! A record matches a [`FilterQuery`] when both hold:
//!
//! 1. the query category is `All`, or equals the record's category exactly
//!    (case-sensitive);
//! 2. the term is empty or whitespace-only, or its lower-cased form is a
//!    substring of the lower-cased title, description, or any tag.
//!
//! [`filter`] is a stable filter: the result keeps catalog order and shares
//! its entries with the catalog. It never fails and never touches the
//! catalog; timing and cancellation belong to the engine in the `folio`
//! crate.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{CategoryFilter, FilterQuery, FilterResult, ProjectRecord};

/// How a named category that does not occur in the catalog is treated.
///
/// Category selectors are normally built from the catalog itself, so this
/// only matters for hand-typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategory {
    /// Exact matching applies as usual, so nothing matches.
    #[default]
    MatchNothing,
    /// The category is ignored, as if `All` had been selected.
    #[serde(rename = "all")]
    TreatAsAll,
}

/// Run a query against a catalog.
pub fn filter(catalog: &Catalog, query: &FilterQuery, policy: UnknownCategory) -> FilterResult {
    let matcher = Matcher::new(catalog, query, policy);
    let records = catalog
        .iter()
        .filter(|r| matcher.is_match(r))
        .cloned()
        .collect();
    FilterResult::from_records(records)
}

/// Evaluate the predicate for a single record, using plain exact-match
/// category semantics.
pub fn matches(record: &ProjectRecord, query: &FilterQuery) -> bool {
    let category = match &query.category {
        CategoryFilter::All => None,
        CategoryFilter::Named(name) => Some(name.as_str()),
    };
    category_matches(record, category) && term_matches(record, &lowered_term(query))
}

/// Query prepared once per evaluation: the effective category and the
/// lower-cased term.
struct Matcher<'q> {
    category: Option<&'q str>,
    term: Option<String>,
}

impl<'q> Matcher<'q> {
    fn new(catalog: &Catalog, query: &'q FilterQuery, policy: UnknownCategory) -> Self {
        let category = match &query.category {
            CategoryFilter::All => None,
            CategoryFilter::Named(name)
                if policy == UnknownCategory::TreatAsAll && !catalog.contains_category(name) =>
            {
                None
            }
            CategoryFilter::Named(name) => Some(name.as_str()),
        };
        Self {
            category,
            term: lowered_term(query),
        }
    }

    fn is_match(&self, record: &ProjectRecord) -> bool {
        category_matches(record, self.category) && term_matches(record, &self.term)
    }
}

fn lowered_term(query: &FilterQuery) -> Option<String> {
    // Only the emptiness check trims; the term itself is matched as typed.
    query.has_term().then(|| query.term.to_lowercase())
}

fn category_matches(record: &ProjectRecord, category: Option<&str>) -> bool {
    category.map_or(true, |c| record.category == c)
}

fn term_matches(record: &ProjectRecord, term: &Option<String>) -> bool {
    let Some(term) = term else {
        return true;
    };
    record.title.to_lowercase().contains(term.as_str())
        || record.description.to_lowercase().contains(term.as_str())
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::builtin_projects;
    use std::sync::Arc;

    fn record(id: u32, title: &str, category: &str, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            link: String::new(),
            featured: false,
            year: "2024".to_string(),
        }
    }

    fn builtin() -> Catalog {
        Catalog::new(builtin_projects()).unwrap()
    }

    fn run(catalog: &Catalog, category: &str, term: &str) -> Vec<u32> {
        filter(
            catalog,
            &FilterQuery::new(category, term),
            UnknownCategory::MatchNothing,
        )
        .ids()
    }

    #[test]
    fn test_all_and_empty_term_returns_catalog() {
        let catalog = builtin();
        let result = filter(&catalog, &FilterQuery::default(), UnknownCategory::MatchNothing);
        assert_eq!(result.ids(), vec![1, 2, 3, 4, 5, 6]);
        for (a, b) in result.iter().zip(catalog.iter()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_whitespace_term_is_empty() {
        let catalog = builtin();
        assert_eq!(run(&catalog, "All", "   "), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_exact_and_case_sensitive() {
        let catalog = builtin();
        assert_eq!(run(&catalog, "Web Design", ""), vec![2, 6]);
        assert!(run(&catalog, "web design", "").is_empty());
    }

    #[test]
    fn test_term_case_insensitive_over_fields() {
        let catalog = Catalog::new(vec![
            record(1, "Alpha Logo", "X", &[]),
            record(2, "Beta", "X", &["LOGO work"]),
            record(3, "Gamma", "X", &["other"]),
        ])
        .unwrap();
        // title and tag hits
        assert_eq!(run(&catalog, "All", "logo"), vec![1, 2]);
        // description hit (every description ends in "description")
        assert_eq!(run(&catalog, "All", "DESCRIPTION"), vec![1, 2, 3]);
    }

    #[test]
    fn test_term_not_trimmed_before_matching() {
        let catalog = Catalog::new(vec![record(1, "Logo", "X", &[])]).unwrap();
        assert!(run(&catalog, "All", "logo ").is_empty());
        assert_eq!(run(&catalog, "All", "logo"), vec![1]);
    }

    #[test]
    fn test_category_and_term_compose_with_and() {
        let catalog = builtin();
        // "E-commerce Website UI" mentions "design" in its tags but is Web Design.
        assert_eq!(run(&catalog, "Branding", "design"), vec![1]);
        assert!(run(&catalog, "All", "design").contains(&2));
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = builtin();
        assert!(run(&catalog, "All", "zzz-no-such-project").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = builtin();
        let queries = [
            ("All", "e"),
            ("Web Design", "re"),
            ("All", "visual"),
            ("Social Media", ""),
            ("All", "a"),
        ];
        for (category, term) in queries {
            let result = filter(
                &catalog,
                &FilterQuery::new(category, term),
                UnknownCategory::MatchNothing,
            );
            let mut cursor = catalog.iter();
            for entry in result.iter() {
                assert!(
                    cursor.any(|c| Arc::ptr_eq(c, entry)),
                    "{} not in catalog order for {:?}/{:?}",
                    entry.id,
                    category,
                    term
                );
            }
        }
    }

    #[test]
    fn test_unknown_category_policies() {
        let catalog = builtin();
        let query = FilterQuery::new("Illustration", "");
        assert!(filter(&catalog, &query, UnknownCategory::MatchNothing).is_empty());
        assert_eq!(
            filter(&catalog, &query, UnknownCategory::TreatAsAll).len(),
            catalog.len()
        );
        // Known categories are unaffected by the policy.
        let known = FilterQuery::new("Branding", "");
        assert_eq!(
            filter(&catalog, &known, UnknownCategory::TreatAsAll).ids(),
            vec![1]
        );
    }

    #[test]
    fn test_matches_single_record() {
        let r = record(1, "Brand Identity Design", "Branding", &["Logo Design"]);
        assert!(matches(&r, &FilterQuery::new("Branding", "identity")));
        assert!(!matches(&r, &FilterQuery::new("Web Design", "identity")));
        assert!(matches(&r, &FilterQuery::new("All", "LOGO")));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(run(&catalog, "All", "").is_empty());
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: UnknownCategory = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(policy, UnknownCategory::TreatAsAll);
        let policy: UnknownCategory = serde_json::from_str("\"match-nothing\"").unwrap();
        assert_eq!(policy, UnknownCategory::MatchNothing);
    }
}

//! The ordered, immutable project catalog.
//!
//! A [`Catalog`] is built once per session from whatever a
//! [`CatalogSource`](crate::source::CatalogSource) returns. Cloning is cheap:
//! records and the derived category list are shared behind `Arc`s, which is
//! also what gives filter results their identity with catalog entries.

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{FilterResult, ProjectRecord, ALL_CATEGORIES};

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[Arc<ProjectRecord>]>,
    /// Distinct categories in first-appearance order, without the sentinel.
    categories: Arc<[String]>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails if two records share an id.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id) {
                bail!("duplicate project id {} ({:?})", record.id, record.title);
            }
        }

        let mut seen = HashSet::new();
        let categories: Vec<String> = records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect();

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
            categories: categories.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            categories: Arc::from(Vec::new()),
        }
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

    pub fn get(&self, id: u32) -> Option<&Arc<ProjectRecord>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Category selector values: `"All"` first, then each distinct category
    /// in the order it first appears in the catalog.
    pub fn categories(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Every record, in catalog order.
    pub fn all(&self) -> FilterResult {
        FilterResult::from_records(self.records.to_vec())
    }

    /// Records flagged `featured`, in catalog order.
    pub fn featured(&self) -> FilterResult {
        FilterResult::from_records(
            self.records
                .iter()
                .filter(|r| r.featured)
                .cloned()
                .collect(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

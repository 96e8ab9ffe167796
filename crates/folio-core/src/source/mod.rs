//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait is how a catalog reaches the engine: once,
//! at startup, as an ordered list of records. The built-in
//! [`StaticCatalog`] serves the site's own projects; the `folio` crate adds
//! a file-backed source. A remote fetch would be one more implementation.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod builtin;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::models::ProjectRecord;

pub use builtin::{builtin_projects, StaticCatalog};

/// Supplier of the session's project records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short label used in logs and error messages.
    fn name(&self) -> &str;

    /// Return every record, in display order.
    async fn load(&self) -> Result<Vec<ProjectRecord>>;
}

/// Load records from a source and build a [`Catalog`] from them.
pub async fn load_catalog<S>(source: &S) -> Result<Catalog>
where
    S: CatalogSource + ?Sized,
{
    let records = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalog from {}", source.name()))?;
    Catalog::new(records).with_context(|| format!("Invalid catalog from {}", source.name()))
}

//! # Folio Core
//!
//! Runtime-free logic for Folio: project records, the ordered catalog,
//! the category + free-text matching predicate, and the catalog source
//! abstraction.
//!
//! This crate contains no tokio, timers, or filesystem I/O. The debounced
//! engine that drives the predicate lives in the `folio` crate.

pub mod catalog;
pub mod filter;
pub mod models;
pub mod source;

//! Catalog adapter
//!
//! In-memory catalog index, built from seed data or a JSON file.

pub mod static_catalog;

pub use static_catalog::StaticCatalog;

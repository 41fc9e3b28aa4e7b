//! Seed data
//!
//! The Guwahati launch catalog and the static helper data shipped with the
//! storefront.

pub mod catalog;
pub mod support;

pub use catalog::{guwahati_experiences, guwahati_vendors};

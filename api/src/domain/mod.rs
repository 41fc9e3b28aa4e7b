//! Domain layer
//!
//! Contains pure business logic with no I/O.
//! - `entities`: Catalog records, the filter evaluator and the step-wizard engine
//! - `ports`: Trait definitions for the catalog and the submission collaborators

pub mod entities;
pub mod ports;

//! Adapters layer
//!
//! Implementations of port traits for the catalog and the external
//! collaborators.

pub mod catalog;
pub mod http;
pub mod memory;
pub mod seed;
pub mod simulated;

pub use catalog::StaticCatalog;
pub use http::HttpCheckoutGateway;
pub use memory::MemoryReviewRepository;
pub use simulated::{SimulatedApplicationGateway, SimulatedAuthGateway, SimulatedCheckoutGateway};

//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod gateways;
pub mod repositories;

pub use gateways::{ApplicationGateway, AuthGateway, CheckoutGateway};
pub use repositories::{CatalogSource, ReviewRepository};

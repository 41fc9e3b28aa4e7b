//! HTTP adapters
//!
//! Clients for collaborators reached over the network.

pub mod checkout_client;

pub use checkout_client::HttpCheckoutGateway;

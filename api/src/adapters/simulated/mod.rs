//! Simulated collaborators
//!
//! Stand-ins for the checkout, authentication and vendor-application
//! backends. Each waits a configured delay before answering.

pub mod applications;
pub mod auth;
pub mod checkout;

pub use applications::SimulatedApplicationGateway;
pub use auth::SimulatedAuthGateway;
pub use checkout::SimulatedCheckoutGateway;

//! Submission collaborator ports
//!
//! Opaque backends a completed wizard hands its payload to. Every call may
//! take a while; the wizard service runs them on a spawned task.

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationReceipt, BookingConfirmation, BookingRequest, Credentials, Identity, Registration,
    VendorApplication,
};
use crate::error::GatewayError;

/// Checkout backend
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Confirm a booking and return the confirmation token
    async fn confirm(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError>;
}

/// Authentication backend
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create an account. An email can only be registered once.
    async fn register(&self, registration: &Registration) -> Result<Identity, GatewayError>;

    /// Check credentials
    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError>;
}

/// Vendor application intake
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    async fn submit(
        &self,
        application: &VendorApplication,
    ) -> Result<ApplicationReceipt, GatewayError>;
}

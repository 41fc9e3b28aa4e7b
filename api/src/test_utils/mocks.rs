//! Mock implementations of port traits
//!
//! In-memory collaborators that record what they were handed, so tests can
//! verify what a submission delivered.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::{SimulatedApplicationGateway, SimulatedAuthGateway, SimulatedCheckoutGateway};
use crate::app::Gateways;
use crate::domain::entities::{
    ApplicationReceipt, BookingConfirmation, BookingRequest, VendorApplication,
};
use crate::domain::ports::{ApplicationGateway, CheckoutGateway};
use crate::error::GatewayError;

/// Every collaborator simulated with the same delay
pub fn simulated_gateways(delay: Duration) -> Gateways {
    Gateways {
        checkout: Arc::new(SimulatedCheckoutGateway::new(delay)),
        auth: Arc::new(SimulatedAuthGateway::new(delay)),
        applications: Arc::new(SimulatedApplicationGateway::new(delay)),
    }
}

// ============================================================================
// Recording Checkout Gateway
// ============================================================================

/// Confirms every booking with a fixed token and keeps the requests
pub struct RecordingCheckoutGateway {
    token: String,
    delay: Duration,
    requests: RwLock<Vec<BookingRequest>>,
}

impl RecordingCheckoutGateway {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            delay: Duration::ZERO,
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Wait before answering. Requests are only recorded once the wait is over.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn requests(&self) -> Vec<BookingRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutGateway for RecordingCheckoutGateway {
    async fn confirm(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.requests.write().unwrap().push(request.clone());

        Ok(BookingConfirmation {
            token: self.token.clone(),
            experience_id: request.experience_id.clone(),
            slot: request.slot.clone(),
            date: request.date,
            guest_name: request.guest.name.clone(),
            amount: request.amount,
        })
    }
}

// ============================================================================
// Failing Checkout Gateway
// ============================================================================

/// Refuses every booking
pub struct FailingCheckoutGateway;

#[async_trait]
impl CheckoutGateway for FailingCheckoutGateway {
    async fn confirm(&self, _request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        Err(GatewayError::Api {
            status: 503,
            message: "checkout backend unavailable".to_string(),
        })
    }
}

// ============================================================================
// Recording Application Gateway
// ============================================================================

/// Accepts every application and keeps it
#[derive(Default)]
pub struct RecordingApplicationGateway {
    applications: RwLock<Vec<VendorApplication>>,
}

impl RecordingApplicationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applications(&self) -> Vec<VendorApplication> {
        self.applications.read().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationGateway for RecordingApplicationGateway {
    async fn submit(
        &self,
        application: &VendorApplication,
    ) -> Result<ApplicationReceipt, GatewayError> {
        self.applications.write().unwrap().push(application.clone());
        SimulatedApplicationGateway::new(Duration::ZERO)
            .submit(application)
            .await
    }
}

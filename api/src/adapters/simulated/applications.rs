//! Simulated vendor application intake

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{ApplicationReceipt, ApplicationStatus, VendorApplication};
use crate::domain::ports::ApplicationGateway;
use crate::error::GatewayError;

/// Puts every application under review after a fixed delay
pub struct SimulatedApplicationGateway {
    delay: Duration,
}

impl SimulatedApplicationGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ApplicationGateway for SimulatedApplicationGateway {
    async fn submit(
        &self,
        application: &VendorApplication,
    ) -> Result<ApplicationReceipt, GatewayError> {
        tokio::time::sleep(self.delay).await;

        Ok(ApplicationReceipt {
            application_id: Uuid::new_v4(),
            business_name: application.business_name.clone(),
            status: ApplicationStatus::UnderReview,
        })
    }
}

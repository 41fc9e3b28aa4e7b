//! Simulated checkout backend

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::entities::{BookingConfirmation, BookingRequest};
use crate::domain::ports::CheckoutGateway;
use crate::error::GatewayError;

/// Accepts every booking after a fixed delay
pub struct SimulatedCheckoutGateway {
    delay: Duration,
}

impl SimulatedCheckoutGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

/// Confirmation code in the `AS-<n>-XJ9` shape shown on the ticket
pub fn confirmation_token() -> String {
    let n: u16 = rand::thread_rng().gen_range(0..1000);
    format!("AS-{}-XJ9", n)
}

#[async_trait]
impl CheckoutGateway for SimulatedCheckoutGateway {
    async fn confirm(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        tokio::time::sleep(self.delay).await;

        Ok(BookingConfirmation {
            token: confirmation_token(),
            experience_id: request.experience_id.clone(),
            slot: request.slot.clone(),
            date: request.date,
            guest_name: request.guest.name.clone(),
            amount: request.amount,
        })
    }
}

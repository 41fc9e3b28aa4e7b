//! Remote checkout backend client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{BookingConfirmation, BookingRequest};
use crate::domain::ports::CheckoutGateway;
use crate::error::GatewayError;

/// Posts bookings to `{base_url}/bookings`
pub struct HttpCheckoutGateway {
    http: Client,
    base_url: String,
}

/// Body returned by the checkout backend
#[derive(Deserialize)]
struct BookingResponse {
    token: String,
}

impl HttpCheckoutGateway {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GatewayError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn confirm(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        let response = self
            .http
            .post(format!("{}/bookings", self.base_url))
            .json(request)
            .send()
            .await?;

        let body: BookingResponse = self.handle_response(response).await?;

        Ok(BookingConfirmation {
            token: body.token,
            experience_id: request.experience_id.clone(),
            slot: request.slot.clone(),
            date: request.date,
            guest_name: request.guest.name.clone(),
            amount: request.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_booking_request;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn posts_booking_and_reads_token() {
        let server = MockServer::start_async().await;
        let request = test_booking_request();

        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/bookings")
                    .json_body_partial(r#"{"experience_id": "e-test", "payment_method": "upi"}"#);
                then.status(201)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"token": "AS-417-XJ9"}));
            })
            .await;

        let gateway = HttpCheckoutGateway::new(server.base_url());
        let confirmation = gateway.confirm(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(confirmation.token, "AS-417-XJ9");
        assert_eq!(confirmation.experience_id, request.experience_id);
    }

    #[tokio::test]
    async fn rejected_booking_maps_to_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bookings");
                then.status(409).body("slot sold out");
            })
            .await;

        let gateway = HttpCheckoutGateway::new(format!("{}/", server.base_url()));
        let result = gateway.confirm(&test_booking_request()).await;

        match result {
            Err(GatewayError::Api { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "slot sold out");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_deserialization_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/bookings");
                then.status(200).body("not json");
            })
            .await;

        let gateway = HttpCheckoutGateway::new(server.base_url());
        let result = gateway.confirm(&test_booking_request()).await;
        assert!(matches!(result, Err(GatewayError::Deserialization(_))));
    }
}

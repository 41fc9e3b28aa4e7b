//! Wizard sessions and their submission outcome

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Identity;
use super::application::ApplicationReceipt;
use super::booking::BookingConfirmation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a successful submission produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Receipt {
    Booking(BookingConfirmation),
    Account(Identity),
    Application(ApplicationReceipt),
}

impl Receipt {
    /// Route the storefront navigates to after success
    pub fn next_route(&self) -> String {
        match self {
            Receipt::Booking(confirmation) => format!("/feedback/{}", confirmation.experience_id),
            Receipt::Account(identity) => identity.user_type.landing_route().to_string(),
            Receipt::Application(_) => "/merchant-dashboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
    NotSubmitted,
    Pending,
    Completed { receipt: Receipt, next_route: String },
    Failed { reason: String },
}

impl SubmissionStatus {
    pub fn completed(receipt: Receipt) -> Self {
        let next_route = receipt.next_route();
        SubmissionStatus::Completed {
            receipt,
            next_route,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::UserType;
    use crate::domain::entities::ApplicationStatus;

    #[test]
    fn next_route_per_receipt() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            display_name: "Asha".into(),
            email: "asha@example.com".into(),
            user_type: UserType::Visitor,
        };
        assert_eq!(Receipt::Account(identity).next_route(), "/");

        let receipt = ApplicationReceipt {
            application_id: Uuid::new_v4(),
            business_name: "Sualkuchi Looms".into(),
            status: ApplicationStatus::UnderReview,
        };
        assert_eq!(
            Receipt::Application(receipt).next_route(),
            "/merchant-dashboard"
        );
    }

    #[test]
    fn status_serializes_with_tag() {
        let json = serde_json::to_value(SubmissionStatus::Failed {
            reason: "declined".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "declined");
    }
}

//! Vendor application domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{FieldBag, UploadMeta};
use crate::error::DomainError;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDetails {
    pub account_name: String,
    pub account_number: String,
    pub ifsc_code: String,
}

impl PayoutDetails {
    /// Account number with all but the last four digits hidden
    pub fn masked_account(&self) -> String {
        let n = self.account_number.chars().count();
        let visible: String = self.account_number.chars().skip(n.saturating_sub(4)).collect();
        format!("{}{}", "*".repeat(n.saturating_sub(4)), visible)
    }
}

impl std::fmt::Debug for PayoutDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayoutDetails")
            .field("account_name", &self.account_name)
            .field("account_number", &self.masked_account())
            .field("ifsc_code", &self.ifsc_code)
            .finish()
    }
}

/// A submitted "Join as Artisan" application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorApplication {
    pub business_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub expertise: Vec<String>,
    pub languages: Vec<String>,
    pub experience_years: u32,
    pub description: String,
    pub hourly_rate: u32,
    pub service_areas: Vec<String>,
    pub availability: Vec<String>,
    pub max_group_size: u8,
    pub profile_photo: UploadMeta,
    pub id_proof: UploadMeta,
    pub address_proof: UploadMeta,
    pub payout: PayoutDetails,
}

impl VendorApplication {
    pub fn from_fields(fields: &FieldBag) -> Result<Self, DomainError> {
        let text = |name: &str| {
            fields
                .text(name)
                .map(str::to_string)
                .ok_or_else(|| DomainError::Validation(format!("{} is required", name)))
        };
        let number = |name: &str| -> Result<u32, DomainError> {
            text(name)?
                .parse::<u32>()
                .map_err(|_| DomainError::Validation(format!("{} must be a whole number", name)))
        };
        let upload = |name: &str| {
            fields
                .upload(name)
                .cloned()
                .ok_or_else(|| DomainError::Validation(format!("{} is required", name)))
        };

        for consent in ["accept_terms", "accept_code_of_conduct"] {
            if !fields.flag(consent) {
                return Err(DomainError::Validation(format!("{} must be accepted", consent)));
            }
        }

        Ok(Self {
            business_name: text("business_name")?,
            full_name: text("full_name")?,
            email: text("email")?.to_lowercase(),
            phone: text("phone")?,
            expertise: fields.list("expertise").to_vec(),
            languages: fields.list("languages").to_vec(),
            experience_years: number("experience_years")?,
            description: text("description")?,
            hourly_rate: number("hourly_rate")?,
            service_areas: fields.list("service_areas").to_vec(),
            availability: fields.list("availability").to_vec(),
            max_group_size: u8::try_from(number("max_group_size")?)
                .ok()
                .filter(|n| (1..=25).contains(n))
                .ok_or_else(|| {
                    DomainError::Validation("max_group_size must be between 1 and 25".to_string())
                })?,
            profile_photo: upload("profile_photo")?,
            id_proof: upload("id_proof")?,
            address_proof: upload("address_proof")?,
            payout: PayoutDetails {
                account_name: text("account_name")?,
                account_number: text("account_number")?,
                ifsc_code: text("ifsc_code")?.to_uppercase(),
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    UnderReview,
    Approved,
    Rejected,
}

/// Acknowledgement returned once an application is accepted for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub application_id: Uuid,
    pub business_name: String,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldValue;
    use crate::test_utils::complete_onboarding_bag;

    #[test]
    fn application_from_complete_bag() {
        let application = VendorApplication::from_fields(&complete_onboarding_bag()).unwrap();
        assert_eq!(application.business_name, "Sualkuchi Looms");
        assert_eq!(application.max_group_size, 10);
        assert_eq!(application.payout.ifsc_code, "SBIN0001234");
        assert!(!application.languages.is_empty());
    }

    #[test]
    fn application_requires_consent() {
        let mut bag = complete_onboarding_bag();
        bag.insert("accept_code_of_conduct", FieldValue::Flag(false));
        assert!(matches!(
            VendorApplication::from_fields(&bag),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn numeric_fields_must_be_whole_numbers() {
        for (field, value) in [
            ("hourly_rate", "NaN"),
            ("hourly_rate", "1500.75"),
            ("experience_years", "inf"),
            ("max_group_size", "300"),
        ] {
            let mut bag = complete_onboarding_bag();
            bag.insert(field, FieldValue::text(value));
            assert!(
                matches!(VendorApplication::from_fields(&bag), Err(DomainError::Validation(_))),
                "{}={} accepted",
                field,
                value
            );
        }
    }

    #[test]
    fn debug_masks_account_number() {
        let payout = PayoutDetails {
            account_name: "Biren".into(),
            account_number: "123456789012".into(),
            ifsc_code: "SBIN0001234".into(),
        };
        assert_eq!(payout.masked_account(), "********9012");
        assert!(!format!("{:?}", payout).contains("123456789012"));
    }
}

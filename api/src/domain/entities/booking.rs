//! Booking domain types
//!
//! What checkout hands to the payment/checkout backend, and what it gets back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::experience::{Experience, ExperienceId, Price};
use super::fields::FieldBag;
use super::vendor::VendorId;
use crate::error::DomainError;

/// Time-of-day options offered on the experience detail view
pub const BOOKING_SLOTS: &[&str] = &["10:00 AM", "12:00 PM", "02:00 PM", "04:00 PM", "06:00 PM"];

/// A selectable booking time carried from the detail view into checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    /// The earliest slot of the day
    pub fn first() -> Self {
        Slot(BOOKING_SLOTS[0].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BOOKING_SLOTS
            .iter()
            .find(|slot| slot.eq_ignore_ascii_case(s))
            .map(|slot| Slot(slot.to_string()))
            .ok_or_else(|| format!("Unknown slot: {}", s))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A completed checkout, ready for the checkout backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub experience_id: ExperienceId,
    pub vendor_id: VendorId,
    pub slot: Slot,
    pub date: NaiveDate,
    pub guest: Guest,
    pub payment_method: String,
    pub amount: Price,
}

impl BookingRequest {
    /// Assemble a request from a submitted checkout bag
    pub fn from_fields(
        experience: &Experience,
        date: NaiveDate,
        fields: &FieldBag,
    ) -> Result<Self, DomainError> {
        let required = |name: &str| {
            fields
                .text(name)
                .map(str::to_string)
                .ok_or_else(|| DomainError::Validation(format!("{} is required", name)))
        };

        let slot = required("slot")?
            .parse::<Slot>()
            .map_err(DomainError::Validation)?;

        Ok(Self {
            experience_id: experience.id.clone(),
            vendor_id: experience.vendor_id.clone(),
            slot,
            date,
            guest: Guest {
                name: required("name")?,
                email: required("email")?,
                phone: required("phone")?,
            },
            payment_method: required("payment_method")?,
            amount: experience.price,
        })
    }
}

/// Answer from the checkout backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Code shown as a QR on the confirmation screen
    pub token: String,
    pub experience_id: ExperienceId,
    pub slot: Slot,
    pub date: NaiveDate,
    pub guest_name: String,
    pub amount: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldValue;
    use crate::test_utils::test_experience;

    #[test]
    fn slot_parse_accepts_known_times_only() {
        assert_eq!("02:00 pm".parse::<Slot>().unwrap().as_str(), "02:00 PM");
        assert!("03:00 PM".parse::<Slot>().is_err());
    }

    #[test]
    fn request_from_complete_bag() {
        let experience = test_experience();
        let mut bag = FieldBag::new();
        bag.insert("slot", FieldValue::text("10:00 AM"));
        bag.insert("name", FieldValue::text("Asha"));
        bag.insert("email", FieldValue::text("asha@example.com"));
        bag.insert("phone", FieldValue::text("+91 98765 43210"));
        bag.insert("payment_method", FieldValue::text("upi"));

        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let request = BookingRequest::from_fields(&experience, date, &bag).unwrap();

        assert_eq!(request.experience_id, experience.id);
        assert_eq!(request.amount, experience.price);
        assert_eq!(request.guest.name, "Asha");
    }

    #[test]
    fn request_requires_guest_fields() {
        let experience = test_experience();
        let mut bag = FieldBag::new();
        bag.insert("slot", FieldValue::text("10:00 AM"));

        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert!(BookingRequest::from_fields(&experience, date, &bag).is_err());
    }
}

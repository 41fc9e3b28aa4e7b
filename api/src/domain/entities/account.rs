//! Account domain types
//!
//! Sign-up and sign-in payloads handed to the authentication backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::FieldBag;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Visitor,
    Merchant,
}

impl UserType {
    /// Where the storefront sends a freshly registered user
    pub fn landing_route(&self) -> &'static str {
        match self {
            UserType::Visitor => "/",
            // Merchants continue to the detailed vendor onboarding
            UserType::Merchant => "/onboarding",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Visitor => write!(f, "visitor"),
            UserType::Merchant => write!(f, "merchant"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visitor" => Ok(UserType::Visitor),
            "merchant" => Ok(UserType::Merchant),
            _ => Err(format!("Unknown user type: {}", s)),
        }
    }
}

fn required(fields: &FieldBag, name: &str) -> Result<String, DomainError> {
    fields
        .text(name)
        .map(str::to_string)
        .ok_or_else(|| DomainError::Validation(format!("{} is required", name)))
}

/// Sign-up payload
#[derive(Clone)]
pub struct Registration {
    pub user_type: UserType,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub business_name: Option<String>,
    pub business_category: Option<String>,
}

impl Registration {
    pub fn from_fields(fields: &FieldBag) -> Result<Self, DomainError> {
        Ok(Self {
            user_type: required(fields, "user_type")?
                .parse()
                .map_err(DomainError::Validation)?,
            full_name: required(fields, "full_name")?,
            email: required(fields, "email")?.to_lowercase(),
            password: required(fields, "password")?,
            business_name: fields.text("business_name").map(str::to_string),
            business_category: fields.text("business_category").map(str::to_string),
        })
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("user_type", &self.user_type)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("business_name", &self.business_name)
            .finish()
    }
}

/// Sign-in payload
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_fields(fields: &FieldBag) -> Result<Self, DomainError> {
        Ok(Self {
            email: required(fields, "email")?.to_lowercase(),
            password: required(fields, "password")?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Who the authentication backend says the user is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub display_name: String,
    pub email: String,
    pub user_type: UserType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldValue;

    #[test]
    fn registration_normalizes_email() {
        let mut bag = FieldBag::new();
        bag.insert("user_type", FieldValue::text("merchant"));
        bag.insert("full_name", FieldValue::text("Biren Kalita"));
        bag.insert("email", FieldValue::text("Biren@Example.com"));
        bag.insert("password", FieldValue::text("muga-silk-123"));

        let registration = Registration::from_fields(&bag).unwrap();
        assert_eq!(registration.email, "biren@example.com");
        assert_eq!(registration.user_type, UserType::Merchant);
        assert_eq!(registration.user_type.landing_route(), "/onboarding");
        assert!(!format!("{:?}", registration).contains("muga-silk-123"));
    }

    #[test]
    fn credentials_require_password() {
        let mut bag = FieldBag::new();
        bag.insert("email", FieldValue::text("a@b.co"));
        assert!(Credentials::from_fields(&bag).is_err());
    }
}

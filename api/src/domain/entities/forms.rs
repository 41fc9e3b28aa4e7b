//! The concrete wizards offered by the storefront

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::booking::BOOKING_SLOTS;
use super::fields::{FieldKind, FieldRule};
use super::wizard::{FieldDef, StepDef, WizardDef};

pub const PAYMENT_METHODS: &[&str] = &["upi", "card", "netbanking"];
pub const USER_TYPES: &[&str] = &["visitor", "merchant"];

/// Which flow a wizard session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Checkout,
    Onboarding,
    Signup,
    Signin,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::Checkout => write!(f, "checkout"),
            FormKind::Onboarding => write!(f, "onboarding"),
            FormKind::Signup => write!(f, "signup"),
            FormKind::Signin => write!(f, "signin"),
        }
    }
}

/// Prebuilt wizard definitions, shared by every session of the same kind
#[derive(Debug, Clone)]
pub struct FormCatalog {
    checkout: Arc<WizardDef>,
    onboarding: Arc<WizardDef>,
    signup: Arc<WizardDef>,
    signin: Arc<WizardDef>,
}

impl FormCatalog {
    pub fn new() -> Self {
        Self {
            checkout: Arc::new(checkout_form()),
            onboarding: Arc::new(onboarding_form()),
            signup: Arc::new(signup_form()),
            signin: Arc::new(signin_form()),
        }
    }

    pub fn def(&self, kind: FormKind) -> Arc<WizardDef> {
        match kind {
            FormKind::Checkout => self.checkout.clone(),
            FormKind::Onboarding => self.onboarding.clone(),
            FormKind::Signup => self.signup.clone(),
            FormKind::Signin => self.signin.clone(),
        }
    }
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn text(name: &'static str, label: &'static str) -> FieldDef {
    FieldDef::required(name, label, FieldKind::Text)
}

fn build(name: &'static str, steps: Vec<StepDef>) -> WizardDef {
    match WizardDef::new(steps) {
        Some(def) => def,
        None => unreachable!("built-in wizard {} has steps", name),
    }
}

/// Booking checkout. The slot is carried over from the detail view and
/// pre-filled when the session starts.
pub fn checkout_form() -> WizardDef {
    build(
        "checkout",
        vec![
            StepDef::new(
                "Guest Details",
                vec![
                    text("name", "Full Name"),
                    text("email", "Email Address").rule(FieldRule::Email),
                    text("phone", "Phone Number").rule(FieldRule::Phone),
                    FieldDef::optional("slot", "Time Slot", FieldKind::Text)
                        .rule(FieldRule::OneOf(BOOKING_SLOTS)),
                ],
            ),
            StepDef::new(
                "Payment",
                vec![text("payment_method", "Payment Method")
                    .rule(FieldRule::OneOf(PAYMENT_METHODS))],
            ),
        ],
    )
}

/// Vendor onboarding ("Join as Artisan")
pub fn onboarding_form() -> WizardDef {
    build(
        "onboarding",
        vec![
            StepDef::new(
                "Personal Information",
                vec![
                    text("business_name", "Business Name"),
                    text("full_name", "Full Name"),
                    text("email", "Email").rule(FieldRule::Email),
                    text("phone", "Phone").rule(FieldRule::Phone),
                ],
            ),
            StepDef::new(
                "Expertise & Experience",
                vec![
                    FieldDef::required("expertise", "Areas of Expertise", FieldKind::List),
                    FieldDef::required("languages", "Languages You Speak", FieldKind::List),
                    text("experience_years", "Years of Experience").rule(FieldRule::Number {
                        min: None,
                        max: None,
                    }),
                    text("description", "About You").rule(FieldRule::MinLength(20)),
                ],
            ),
            StepDef::new(
                "Service Details",
                vec![
                    text("hourly_rate", "Hourly Rate (INR)").rule(FieldRule::Number {
                        min: None,
                        max: None,
                    }),
                    FieldDef::required("service_areas", "Service Areas", FieldKind::List),
                    FieldDef::required("availability", "Availability", FieldKind::List),
                    text("max_group_size", "Maximum Group Size").rule(FieldRule::Number {
                        min: Some(1),
                        max: Some(25),
                    }),
                ],
            ),
            StepDef::new(
                "Documents & Payout",
                vec![
                    FieldDef::required("profile_photo", "Profile Photo", FieldKind::Upload),
                    FieldDef::required("id_proof", "Government ID Proof", FieldKind::Upload),
                    FieldDef::required("address_proof", "Address Proof", FieldKind::Upload),
                    text("account_name", "Account Holder Name"),
                    text("account_number", "Account Number"),
                    text("ifsc_code", "IFSC Code").rule(FieldRule::Ifsc),
                ],
            ),
            StepDef::new(
                "Terms",
                vec![
                    FieldDef::required("accept_terms", "Accept Terms", FieldKind::Flag),
                    FieldDef::required(
                        "accept_code_of_conduct",
                        "Accept Code of Conduct",
                        FieldKind::Flag,
                    ),
                ],
            ),
        ],
    )
}

pub fn signup_form() -> WizardDef {
    build(
        "signup",
        vec![
            StepDef::new(
                "Account Type",
                vec![text("user_type", "I am a").rule(FieldRule::OneOf(USER_TYPES))],
            ),
            StepDef::new(
                "Your Details",
                vec![
                    text("full_name", "Full Name"),
                    text("email", "Email").rule(FieldRule::Email),
                    text("password", "Password").rule(FieldRule::MinLength(8)),
                    FieldDef::optional("business_name", "Business Name", FieldKind::Text),
                    FieldDef::optional("business_category", "Business Category", FieldKind::Text),
                ],
            ),
        ],
    )
}

pub fn signin_form() -> WizardDef {
    build(
        "signin",
        vec![StepDef::new(
            "Sign In",
            vec![
                text("email", "Email").rule(FieldRule::Email),
                text("password", "Password"),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FieldValue;

    #[test]
    fn step_counts() {
        let forms = FormCatalog::new();
        assert_eq!(forms.def(FormKind::Checkout).total_steps(), 2);
        assert_eq!(forms.def(FormKind::Onboarding).total_steps(), 5);
        assert_eq!(forms.def(FormKind::Signup).total_steps(), 2);
        assert_eq!(forms.def(FormKind::Signin).total_steps(), 1);
    }

    #[test]
    fn field_names_are_unique_within_each_form() {
        let forms = FormCatalog::new();
        for kind in [
            FormKind::Checkout,
            FormKind::Onboarding,
            FormKind::Signup,
            FormKind::Signin,
        ] {
            let def = forms.def(kind);
            let mut names: Vec<&str> = def
                .steps()
                .iter()
                .flat_map(|s| s.fields.iter().map(|f| f.name))
                .collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate field in {}", kind);
        }
    }

    #[test]
    fn checkout_guest_step_requires_contact_fields() {
        let def = checkout_form();
        assert_eq!(
            def.steps()[0].required_fields(),
            vec!["name", "email", "phone"]
        );
    }

    #[test]
    fn checkout_slot_must_be_an_offered_time() {
        let def = checkout_form();
        let slot = def.field("slot").unwrap();
        assert!(slot.rules[0].check(&FieldValue::text("02:00 PM")).is_ok());
        assert!(slot.rules[0].check(&FieldValue::text("midnight")).is_err());
    }
}

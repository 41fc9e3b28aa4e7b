//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the collaborators
//! wizard submissions are delivered to.

pub mod catalog_service;
pub mod feedback_service;
pub mod support_service;
pub mod wizard_service;

pub use catalog_service::{
    CatalogService, ExperienceCard, ExperienceDetail, Facets, Listing, PhraseList, VendorProfile,
};
pub use feedback_service::{FeedbackService, ReviewList};
pub use support_service::{PhrasebookView, SafetyPointView, SupportService, Translation};
pub use wizard_service::{FieldView, Gateways, SessionView, WizardService};

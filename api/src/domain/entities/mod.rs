//! Domain entities
//!
//! Pure domain models: the experience catalog, the filter evaluator, the
//! step-wizard engine and the payloads each wizard hands off on submit.

pub mod account;
pub mod application;
pub mod booking;
pub mod experience;
pub mod fields;
pub mod filter;
pub mod forms;
pub mod review;
pub mod session;
pub mod support;
pub mod vendor;
pub mod wizard;

pub use account::{Credentials, Identity, Registration};
pub use application::{ApplicationReceipt, ApplicationStatus, VendorApplication};
pub use booking::{BookingConfirmation, BookingRequest, Slot, BOOKING_SLOTS};
pub use experience::{Category, DurationBucket, Experience, ExperienceId, GeoPoint, Phrase, Price};
pub use fields::{FieldBag, FieldIssue, FieldKind, FieldValue, UploadMeta};
pub use filter::{ExperienceFilter, Facet, Relaxation};
pub use forms::{FormCatalog, FormKind};
pub use review::{NewReview, Review};
pub use session::{Receipt, SessionId, SubmissionStatus};
pub use support::{
    DictionaryEntry, EmergencyContact, Language, PhraseCategory, PhrasebookEntry, PointType,
    SafetyLevel, SafetyPoint, SPEECH_LOCALE,
};
pub use vendor::{Contact, Vendor, VendorId};
pub use wizard::{Transition, Wizard, WizardState};

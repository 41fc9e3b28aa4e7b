//! Repository port traits
//!
//! These traits define the interface for data the service reads and keeps.
//! Implementations are provided by adapters (static catalog, in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Experience, ExperienceId, Review, Vendor, VendorId};
use crate::error::DomainError;

/// Read-only experience and vendor catalog.
///
/// Loaded once at start-up and never mutated, so lookups are synchronous.
pub trait CatalogSource: Send + Sync {
    /// All experiences in catalog order
    fn experiences(&self) -> &[Experience];

    /// All vendors in catalog order
    fn vendors(&self) -> &[Vendor];

    /// Find an experience by ID
    fn experience(&self, id: &ExperienceId) -> Option<&Experience>;

    /// Find a vendor by ID
    fn vendor(&self, id: &VendorId) -> Option<&Vendor>;

    /// Resolve the vendor hosting an experience
    fn vendor_of(&self, experience: &Experience) -> Option<&Vendor> {
        self.vendor(&experience.vendor_id)
    }

    /// Experiences hosted by a vendor, in catalog order
    fn experiences_by_vendor(&self, id: &VendorId) -> Vec<&Experience> {
        self.experiences()
            .iter()
            .filter(|e| &e.vendor_id == id)
            .collect()
    }
}

/// Repository for post-experience feedback
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Store a validated review
    async fn create(&self, review: &Review) -> Result<Review, DomainError>;

    /// Reviews for an experience, newest first
    async fn list_for_experience(&self, id: &ExperienceId) -> Result<Vec<Review>, DomainError>;
}

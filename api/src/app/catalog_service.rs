//! Catalog service
//!
//! Discovery views over the read-only catalog: the filtered listing with its
//! relaxation hint, the experience detail page, vendor profiles and the
//! facet lists the filter bar is built from.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{
    Category, DurationBucket, Experience, ExperienceFilter, ExperienceId, Phrase, Price,
    Relaxation, Vendor, VendorId, BOOKING_SLOTS, SPEECH_LOCALE,
};
use crate::domain::ports::CatalogSource;
use crate::error::{AppError, DomainError};

/// Vendor fields shown on a listing card
#[derive(Debug, Clone, Serialize)]
pub struct VendorSummary {
    pub id: VendorId,
    pub name: String,
    pub role: String,
    pub verified: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl From<&Vendor> for VendorSummary {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id.clone(),
            name: vendor.name.clone(),
            role: vendor.role.clone(),
            verified: vendor.verified,
            rating: vendor.display_rating(),
            reviews: vendor.reviews,
        }
    }
}

/// One card in the listing grid
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceCard {
    pub id: ExperienceId,
    pub title: String,
    pub category: Category,
    pub category_label: &'static str,
    pub duration: DurationBucket,
    pub duration_label: &'static str,
    pub price: Price,
    pub price_label: String,
    pub description: String,
    pub vendor: VendorSummary,
}

/// The filtered listing
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub filter: ExperienceFilter,
    pub count: usize,
    pub experiences: Vec<ExperienceCard>,
    /// Only present when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxation: Option<Relaxation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceDetail {
    pub experience: Experience,
    pub price_label: String,
    pub vendor: Vendor,
    pub slots: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorProfile {
    pub vendor: Vendor,
    pub experiences: Vec<ExperienceCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetOption {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Facets {
    pub categories: Vec<FacetOption>,
    pub durations: Vec<FacetOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseList {
    pub experience_id: ExperienceId,
    pub locale: &'static str,
    pub phrases: Vec<Phrase>,
}

/// Service for browsing the catalog
pub struct CatalogService<C>
where
    C: CatalogSource,
{
    catalog: Arc<C>,
}

impl<C> CatalogService<C>
where
    C: CatalogSource,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Apply a filter; an empty result carries a relaxation suggestion
    pub fn browse(&self, filter: ExperienceFilter) -> Result<Listing, AppError> {
        let experiences = self.catalog.experiences();
        let matched = filter.apply(experiences);

        let cards = matched
            .iter()
            .map(|e| self.card(e))
            .collect::<Result<Vec<_>, _>>()?;
        let relaxation = if cards.is_empty() {
            filter.relaxation(experiences)
        } else {
            None
        };

        tracing::debug!(
            search = %filter.search,
            category = filter.category.as_str(),
            duration = filter.duration.as_str(),
            count = cards.len(),
            "Browsed catalog"
        );

        Ok(Listing {
            count: cards.len(),
            filter,
            experiences: cards,
            relaxation,
        })
    }

    pub fn experience(&self, id: &ExperienceId) -> Result<ExperienceDetail, AppError> {
        let experience = self.find(id)?;
        let vendor = self.vendor_of(experience)?;

        Ok(ExperienceDetail {
            price_label: experience.price.to_string(),
            experience: experience.clone(),
            vendor: vendor.clone(),
            slots: BOOKING_SLOTS.to_vec(),
        })
    }

    pub fn vendor_profile(&self, id: &VendorId) -> Result<VendorProfile, AppError> {
        let vendor = self
            .catalog
            .vendor(id)
            .ok_or_else(|| DomainError::NotFound(format!("Vendor {}", id)))?;

        let experiences = self
            .catalog
            .experiences_by_vendor(id)
            .into_iter()
            .map(|e| self.card(e))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VendorProfile {
            vendor: vendor.clone(),
            experiences,
        })
    }

    pub fn facets(&self) -> Facets {
        Facets {
            categories: Category::ALL
                .iter()
                .map(|c| FacetOption {
                    code: c.code(),
                    label: c.label(),
                })
                .collect(),
            durations: DurationBucket::ALL
                .iter()
                .map(|d| FacetOption {
                    code: d.code(),
                    label: d.description(),
                })
                .collect(),
        }
    }

    pub fn phrases(&self, id: &ExperienceId) -> Result<PhraseList, AppError> {
        let experience = self.find(id)?;
        Ok(PhraseList {
            experience_id: experience.id.clone(),
            locale: SPEECH_LOCALE,
            phrases: experience.phrases.clone(),
        })
    }

    fn find(&self, id: &ExperienceId) -> Result<&Experience, AppError> {
        self.catalog
            .experience(id)
            .ok_or_else(|| DomainError::NotFound(format!("Experience {}", id)).into())
    }

    fn vendor_of(&self, experience: &Experience) -> Result<&Vendor, AppError> {
        self.catalog.vendor_of(experience).ok_or_else(|| {
            AppError::Internal(format!(
                "experience {} has no vendor {}",
                experience.id, experience.vendor_id
            ))
        })
    }

    fn card(&self, experience: &Experience) -> Result<ExperienceCard, AppError> {
        let vendor = self.vendor_of(experience)?;
        Ok(ExperienceCard {
            id: experience.id.clone(),
            title: experience.title.clone(),
            category: experience.category,
            category_label: experience.category.label(),
            duration: experience.duration,
            duration_label: experience.duration.description(),
            price: experience.price,
            price_label: experience.price.to_string(),
            description: experience.description.clone(),
            vendor: vendor.into(),
        })
    }
}

//! Map-backed catalog index

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::adapters::seed;
use crate::domain::entities::{Experience, ExperienceId, Vendor, VendorId};
use crate::domain::ports::CatalogSource;
use crate::error::DomainError;

/// Immutable catalog with O(1) lookups by id.
///
/// Construction checks that ids are unique and that every experience points
/// at a vendor that exists.
#[derive(Debug)]
pub struct StaticCatalog {
    experiences: Vec<Experience>,
    vendors: Vec<Vendor>,
    experience_index: HashMap<ExperienceId, usize>,
    vendor_index: HashMap<VendorId, usize>,
}

/// On-disk catalog layout
#[derive(Deserialize)]
struct CatalogFile {
    vendors: Vec<Vendor>,
    experiences: Vec<Experience>,
}

impl StaticCatalog {
    pub fn new(experiences: Vec<Experience>, vendors: Vec<Vendor>) -> Result<Self, DomainError> {
        let mut vendor_index = HashMap::with_capacity(vendors.len());
        for (i, vendor) in vendors.iter().enumerate() {
            if vendor_index.insert(vendor.id.clone(), i).is_some() {
                return Err(DomainError::Conflict(format!(
                    "duplicate vendor id {}",
                    vendor.id
                )));
            }
        }

        let mut experience_index = HashMap::with_capacity(experiences.len());
        for (i, experience) in experiences.iter().enumerate() {
            if !vendor_index.contains_key(&experience.vendor_id) {
                return Err(DomainError::Validation(format!(
                    "experience {} references unknown vendor {}",
                    experience.id, experience.vendor_id
                )));
            }
            if experience_index.insert(experience.id.clone(), i).is_some() {
                return Err(DomainError::Conflict(format!(
                    "duplicate experience id {}",
                    experience.id
                )));
            }
        }

        Ok(Self {
            experiences,
            vendors,
            experience_index,
            vendor_index,
        })
    }

    /// The built-in Guwahati catalog
    pub fn guwahati() -> Result<Self, DomainError> {
        Self::new(seed::guwahati_experiences(), seed::guwahati_vendors())
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| DomainError::Validation(format!("invalid catalog JSON: {}", e)))?;
        Self::new(file.experiences, file.vendors)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Internal(format!("cannot read catalog {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}

impl CatalogSource for StaticCatalog {
    fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    fn experience(&self, id: &ExperienceId) -> Option<&Experience> {
        self.experience_index
            .get(id)
            .map(|&i| &self.experiences[i])
    }

    fn vendor(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendor_index.get(id).map(|&i| &self.vendors[i])
    }
}

//! Vendor domain entity
//!
//! The host or operator behind one or more experiences.

use serde::{Deserialize, Serialize};

/// Unique identifier for a vendor (e.g. `v1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub String);

impl VendorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VendorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// A verified (or not) experience host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub bio: String,
    /// Short role label, e.g. "Master Weaver"
    pub role: String,
    pub verified: bool,
    pub location: String,
    /// Average rating on a 0-5 scale
    pub rating: f32,
    pub reviews: u32,
    pub contact: Contact,
}

impl Vendor {
    /// Rating clamped to the 0-5 display range
    pub fn display_rating(&self) -> f32 {
        self.rating.clamp(0.0, 5.0)
    }
}

//! Experience domain entity
//!
//! A bookable activity in the catalog. Experiences are created once when the
//! catalog is loaded and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::vendor::VendorId;

/// Unique identifier for an experience (e.g. `e2`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceId(pub String);

impl ExperienceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExperienceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ExperienceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Experience category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heritage,
    Tea,
    Riverfront,
    Craft,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Heritage,
        Category::Tea,
        Category::Riverfront,
        Category::Craft,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Heritage => "heritage",
            Category::Tea => "tea",
            Category::Riverfront => "riverfront",
            Category::Craft => "craft",
        }
    }

    /// Display label used on the category tabs
    pub fn label(&self) -> &'static str {
        match self {
            Category::Heritage => "Heritage",
            Category::Tea => "Tea-Café Trails",
            Category::Riverfront => "Riverfront",
            Category::Craft => "Craft Demos",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heritage" => Ok(Category::Heritage),
            "tea" => Ok(Category::Tea),
            "riverfront" => Ok(Category::Riverfront),
            "craft" => Ok(Category::Craft),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Duration bucket. This is a fixed code, not a numeric duration: a 90 minute
/// activity still has to be tagged with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "30m")]
    QuickBite,
    #[serde(rename = "60m")]
    DeepDive,
    #[serde(rename = "240m")]
    HalfDay,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 3] = [
        DurationBucket::QuickBite,
        DurationBucket::DeepDive,
        DurationBucket::HalfDay,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DurationBucket::QuickBite => "30m",
            DurationBucket::DeepDive => "60m",
            DurationBucket::HalfDay => "240m",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DurationBucket::QuickBite => "Quick Bite",
            DurationBucket::DeepDive => "Deep Dive",
            DurationBucket::HalfDay => "Half Day",
        }
    }

    /// Nominal length in minutes, used only to order buckets
    pub fn minutes(&self) -> u32 {
        match self {
            DurationBucket::QuickBite => 30,
            DurationBucket::DeepDive => 60,
            DurationBucket::HalfDay => 240,
        }
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30m" => Ok(DurationBucket::QuickBite),
            "60m" => Ok(DurationBucket::DeepDive),
            "240m" => Ok(DurationBucket::HalfDay),
            _ => Err(format!("Unknown duration bucket: {}", s)),
        }
    }
}

/// Currency tag for prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }
}

/// Whole-unit price tagged with its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: u32,
    pub currency: Currency,
}

impl Price {
    pub fn inr(amount: u32) -> Self {
        Self {
            amount,
            currency: Currency::Inr,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount)
    }
}

/// A local-language phrase shown on the experience's language helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub original: String,
    pub translated: String,
    pub pronunciation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A bookable experience
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub vendor_id: VendorId,
    pub category: Category,
    pub duration: DurationBucket,
    pub price: Price,
    pub description: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

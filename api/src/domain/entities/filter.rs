//! Experience discovery filter
//!
//! Three independent predicates (title search, category, duration bucket)
//! intersected over the catalog. Evaluation is pure and keeps catalog order.

use serde::{Serialize, Serializer};

use super::experience::{DurationBucket, Experience};

/// Sentinel accepted from clients for "no restriction"
pub const FACET_ALL: &str = "all";

/// A single-choice facet selection: everything, or one exact code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Parse a raw selection. Missing, blank and "all" mean no restriction.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Facet::All,
            Some(s) if s.eq_ignore_ascii_case(FACET_ALL) => Facet::All,
            Some(s) => Facet::Only(s.to_string()),
        }
    }

    /// Exact string comparison. Unknown codes admit nothing.
    pub fn admits(&self, code: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(selected) => selected == code,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => FACET_ALL,
            Facet::Only(selected) => selected,
        }
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Listing filter state owned by a browsing view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceFilter {
    pub search: String,
    pub category: Facet,
    pub duration: Facet,
}

impl ExperienceFilter {
    pub fn new(search: impl Into<String>, category: Facet, duration: Facet) -> Self {
        Self {
            search: search.into(),
            category,
            duration,
        }
    }

    pub fn with_duration(mut self, duration: Facet) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category == Facet::All && self.duration == Facet::All
    }

    /// Check a single experience against all three predicates
    pub fn matches(&self, experience: &Experience) -> bool {
        let needle = self.needle();
        self.matches_with(experience, needle.as_deref())
    }

    /// Ordered sublist of experiences satisfying every predicate
    pub fn apply<'a>(&self, experiences: &'a [Experience]) -> Vec<&'a Experience> {
        let needle = self.needle();
        experiences
            .iter()
            .filter(|e| self.matches_with(e, needle.as_deref()))
            .collect()
    }

    /// One-click way out of an empty result.
    ///
    /// Keeps search and category and tries the catalog's duration buckets from
    /// the longest down; falls back to clearing everything.
    pub fn relaxation(&self, experiences: &[Experience]) -> Option<Relaxation> {
        if !self.apply(experiences).is_empty() {
            return None;
        }

        let mut buckets: Vec<DurationBucket> = Vec::new();
        for experience in experiences {
            if !buckets.contains(&experience.duration) {
                buckets.push(experience.duration);
            }
        }
        buckets.sort_by(|a, b| b.minutes().cmp(&a.minutes()));

        for bucket in buckets {
            let candidate = Facet::Only(bucket.code().to_string());
            if candidate == self.duration {
                continue;
            }
            let matches = self.clone().with_duration(candidate).apply(experiences).len();
            if matches > 0 {
                return Some(Relaxation::TryDuration {
                    duration: bucket,
                    matches,
                });
            }
        }

        if self.is_unfiltered() {
            None
        } else {
            Some(Relaxation::ClearFilters {
                matches: experiences.len(),
            })
        }
    }

    fn needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    fn matches_with(&self, experience: &Experience, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !experience.title.to_lowercase().contains(needle) {
                return false;
            }
        }
        self.category.admits(experience.category.code())
            && self.duration.admits(experience.duration.code())
    }
}

/// Suggested way to widen an empty listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Relaxation {
    /// Switch the duration bucket, keeping search and category
    TryDuration {
        duration: DurationBucket,
        matches: usize,
    },
    /// Drop every restriction
    ClearFilters { matches: usize },
}

impl Relaxation {
    /// The filter a client gets after accepting the suggestion
    pub fn apply_to(&self, filter: &ExperienceFilter) -> ExperienceFilter {
        match self {
            Relaxation::TryDuration { duration, .. } => filter
                .clone()
                .with_duration(Facet::Only(duration.code().to_string())),
            Relaxation::ClearFilters { .. } => ExperienceFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use crate::test_utils::{bucket_catalog, guwahati_experiences};

    fn duration(code: &str) -> ExperienceFilter {
        ExperienceFilter::new("", Facet::All, Facet::parse(Some(code)))
    }

    fn titles(experiences: &[&Experience]) -> Vec<String> {
        experiences.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn empty_filter_returns_full_catalog_in_order() {
        let catalog = guwahati_experiences();
        let result = ExperienceFilter::default().apply(&catalog);

        assert_eq!(result.len(), catalog.len());
        for (got, expected) in result.iter().zip(catalog.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn category_filter_includes_exactly_matching_experiences() {
        let catalog = guwahati_experiences();

        for category in Category::ALL {
            let filter = ExperienceFilter::new("", Facet::Only(category.code().into()), Facet::All);
            for experience in &catalog {
                assert_eq!(
                    filter.matches(experience),
                    experience.category == category,
                    "{} under {}",
                    experience.id,
                    category
                );
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_title_substring() {
        let catalog = guwahati_experiences();
        let heritage = Facet::Only("heritage".into());

        for query in ["Kamakhya", "kamakhya", "KAMAKHYA"] {
            let filter = ExperienceFilter::new(query, heritage.clone(), Facet::All);
            let found = titles(&filter.apply(&catalog));
            assert!(found.contains(&"Kamakhya Sunset Trail".to_string()));
            assert!(!found.contains(&"Navagraha Temple Visit".to_string()));
        }
    }

    #[test]
    fn duration_match_is_exact_code() {
        let catalog = bucket_catalog();

        let result = duration("60m").apply(&catalog);
        assert!(result.iter().all(|e| e.duration == DurationBucket::DeepDive));
        assert!(!result.is_empty());
    }

    #[test]
    fn unlisted_bucket_is_empty_and_suggests_longest() {
        let catalog = bucket_catalog();
        let filter = duration("90m");

        assert!(filter.apply(&catalog).is_empty());
        let relaxation = filter.relaxation(&catalog).unwrap();
        assert_eq!(
            relaxation,
            Relaxation::TryDuration {
                duration: DurationBucket::HalfDay,
                matches: 1,
            }
        );
        assert_eq!(relaxation.apply_to(&filter).duration.as_str(), "240m");
    }

    #[test]
    fn relaxation_keeps_search_and_category() {
        let catalog = guwahati_experiences();
        // Tea only exists as a 30m experience
        let filter = ExperienceFilter::new(
            "tea",
            Facet::Only("tea".into()),
            Facet::Only("240m".into()),
        );

        let relaxation = filter.relaxation(&catalog).unwrap();
        assert_eq!(
            relaxation,
            Relaxation::TryDuration {
                duration: DurationBucket::QuickBite,
                matches: 1,
            }
        );
    }

    #[test]
    fn relaxation_falls_back_to_clearing_filters() {
        let catalog = guwahati_experiences();
        let filter = ExperienceFilter::new("zzz", Facet::All, Facet::All);

        assert_eq!(
            filter.relaxation(&catalog),
            Some(Relaxation::ClearFilters {
                matches: catalog.len()
            })
        );
    }

    #[test]
    fn no_relaxation_when_results_exist() {
        let catalog = guwahati_experiences();
        assert_eq!(ExperienceFilter::default().relaxation(&catalog), None);
    }

    #[test]
    fn facet_parse_treats_all_and_blank_as_unrestricted() {
        assert_eq!(Facet::parse(None), Facet::All);
        assert_eq!(Facet::parse(Some("")), Facet::All);
        assert_eq!(Facet::parse(Some("ALL")), Facet::All);
        assert_eq!(Facet::parse(Some("craft")), Facet::Only("craft".into()));
    }
}

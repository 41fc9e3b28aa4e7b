//! Language and safety helpers
//!
//! Phrasebook search, the fixed-dictionary translator, safety meeting points
//! and emergency contacts. All of it is static reference data.

use serde::Serialize;

use crate::adapters::seed::support::{dictionary, emergency_contacts, phrasebook, safety_points};
use crate::domain::entities::{
    DictionaryEntry, EmergencyContact, Facet, Language, PhraseCategory, PhrasebookEntry,
    PointType, SafetyLevel, SafetyPoint, SPEECH_LOCALE,
};
use crate::error::{AppError, DomainError};

#[derive(Debug, Clone, Serialize)]
pub struct PhrasebookView {
    pub locale: &'static str,
    pub count: usize,
    pub phrases: Vec<PhrasebookEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translation {
    pub original: String,
    pub translated: String,
    pub language: Language,
    pub language_name: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetyPointView {
    #[serde(flatten)]
    pub point: SafetyPoint,
    pub safety_level: SafetyLevel,
}

pub struct SupportService {
    phrases: Vec<PhrasebookEntry>,
    dictionary: Vec<DictionaryEntry>,
    points: Vec<SafetyPoint>,
    contacts: Vec<EmergencyContact>,
}

impl SupportService {
    pub fn new() -> Self {
        Self {
            phrases: phrasebook(),
            dictionary: dictionary(),
            points: safety_points(),
            contacts: emergency_contacts(),
        }
    }

    /// Phrasebook filtered by free text and category ("all" or absent for any)
    pub fn phrases(&self, search: &str, category: Option<&str>) -> Result<PhrasebookView, AppError> {
        let category = match Facet::parse(category) {
            Facet::All => None,
            Facet::Only(code) => Some(
                PhraseCategory::ALL
                    .into_iter()
                    .find(|c| c.code() == code)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown phrase category: {}", code))
                    })?,
            ),
        };

        let phrases: Vec<PhrasebookEntry> = self
            .phrases
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| p.matches_search(search))
            .cloned()
            .collect();

        Ok(PhrasebookView {
            locale: SPEECH_LOCALE,
            count: phrases.len(),
            phrases,
        })
    }

    pub fn translate(&self, text: &str, target: &str) -> Result<Translation, AppError> {
        let language: Language = target.parse().map_err(AppError::BadRequest)?;
        let original = text.trim();
        if original.is_empty() {
            return Err(DomainError::Validation("text to translate is empty".to_string()).into());
        }

        let key = original.to_lowercase();
        let entry = self.dictionary.iter().find(|e| e.english == key);

        let (translated, available) = match (language, entry) {
            (Language::En, _) => (original.to_string(), true),
            (_, Some(entry)) => (entry.rendering(language).to_string(), true),
            (_, None) => (format!("{} (Translation not available)", original), false),
        };

        tracing::debug!(language = language.code(), available, "Translated phrase");

        Ok(Translation {
            original: original.to_string(),
            translated,
            language,
            language_name: language.name(),
            available,
        })
    }

    /// Meeting points of one type, or all of them
    pub fn safety_points(&self, point_type: Option<&str>) -> Result<Vec<SafetyPointView>, AppError> {
        let wanted = match Facet::parse(point_type) {
            Facet::All => None,
            Facet::Only(code) => Some(code.parse::<PointType>().map_err(AppError::BadRequest)?),
        };

        Ok(self
            .points
            .iter()
            .filter(|p| wanted.map_or(true, |t| p.point_type == t))
            .map(|p| SafetyPointView {
                point: p.clone(),
                safety_level: p.safety_level(),
            })
            .collect())
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }
}

impl Default for SupportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrasebook_filters_by_category_and_search() {
        let service = SupportService::new();

        let all = service.phrases("", None).unwrap();
        assert_eq!(all.count, 16);
        assert_eq!(all.locale, "as-IN");

        let emergency = service.phrases("", Some("emergency")).unwrap();
        assert!(emergency.count > 0);
        assert!(emergency
            .phrases
            .iter()
            .all(|p| p.category == PhraseCategory::Emergency));

        let hello = service.phrases("HELLO", Some("all")).unwrap();
        assert!(hello.phrases.iter().all(|p| p.english.to_lowercase().contains("hello")));
        assert!(hello.count >= 1);
    }

    #[test]
    fn unknown_phrase_category_is_bad_request() {
        let result = SupportService::new().phrases("", Some("weather"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn translate_hits_dictionary_case_insensitively() {
        let t = SupportService::new().translate("  Thank You ", "hi").unwrap();
        assert_eq!(t.translated, "धन्यवाद");
        assert_eq!(t.original, "Thank You");
        assert!(t.available);
        assert_eq!(t.language_name, "Hindi");
    }

    #[test]
    fn translate_miss_falls_back() {
        let t = SupportService::new().translate("good morning", "as").unwrap();
        assert!(!t.available);
        assert_eq!(t.translated, "good morning (Translation not available)");
    }

    #[test]
    fn translate_to_english_echoes_input() {
        let t = SupportService::new().translate("anything at all", "en").unwrap();
        assert!(t.available);
        assert_eq!(t.translated, "anything at all");
    }

    #[test]
    fn translate_rejects_blank_and_unknown_language() {
        let service = SupportService::new();
        assert!(matches!(
            service.translate("   ", "as"),
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
        assert!(matches!(
            service.translate("hello", "fr"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn safety_points_filter_by_type() {
        let service = SupportService::new();
        assert_eq!(service.safety_points(None).unwrap().len(), 5);

        let temples = service.safety_points(Some("temple")).unwrap();
        assert_eq!(temples.len(), 1);
        assert_eq!(temples[0].point.name, "Kamakhya Temple Main Gate");
        assert_eq!(temples[0].safety_level, SafetyLevel::VerySafe);

        assert!(service.safety_points(Some("beach")).is_err());
    }

    #[test]
    fn emergency_contacts_are_fixed() {
        assert_eq!(SupportService::new().emergency_contacts().len(), 5);
    }
}

//! Language and safety helper data
//!
//! Static reference records behind the phrasebook, the translator and the
//! safety map.

use serde::{Deserialize, Serialize};

use super::experience::GeoPoint;

/// Locale a browser speech engine would use for Assamese
pub const SPEECH_LOCALE: &str = "as-IN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greetings,
    Directions,
    Emergency,
    Shopping,
    Food,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 5] = [
        PhraseCategory::Greetings,
        PhraseCategory::Directions,
        PhraseCategory::Emergency,
        PhraseCategory::Shopping,
        PhraseCategory::Food,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PhraseCategory::Greetings => "greetings",
            PhraseCategory::Directions => "directions",
            PhraseCategory::Emergency => "emergency",
            PhraseCategory::Shopping => "shopping",
            PhraseCategory::Food => "food",
        }
    }
}

impl std::fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasebookEntry {
    pub id: u32,
    pub english: String,
    pub assamese: String,
    pub phonetic: String,
    pub category: PhraseCategory,
}

impl PhrasebookEntry {
    /// Case-insensitive match on either the English or the Assamese text
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.english.to_lowercase().contains(&needle)
            || self.assamese.to_lowercase().contains(&needle)
    }
}

/// Translator target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    As,
    Hi,
    Bn,
    En,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::As, Language::Hi, Language::Bn, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::As => "as",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::En => "en",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::As => "Assamese",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
            Language::En => "English",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

/// One dictionary row: an English phrase and its fixed renderings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub english: String,
    pub assamese: String,
    pub hindi: String,
    pub bengali: String,
}

impl DictionaryEntry {
    pub fn rendering(&self, language: Language) -> &str {
        match language {
            Language::As => &self.assamese,
            Language::Hi => &self.hindi,
            Language::Bn => &self.bengali,
            Language::En => &self.english,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Temple,
    Riverfront,
    Park,
    Police,
    Transport,
}

impl std::str::FromStr for PointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temple" => Ok(PointType::Temple),
            "riverfront" => Ok(PointType::Riverfront),
            "park" => Ok(PointType::Park),
            "police" => Ok(PointType::Police),
            "transport" => Ok(PointType::Transport),
            _ => Err(format!("Unknown point type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyLevel {
    #[serde(rename = "Very Safe")]
    VerySafe,
    Safe,
    Moderate,
    Caution,
}

impl SafetyLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => SafetyLevel::VerySafe,
            7..=8 => SafetyLevel::Safe,
            5..=6 => SafetyLevel::Moderate,
            _ => SafetyLevel::Caution,
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyLevel::VerySafe => write!(f, "Very Safe"),
            SafetyLevel::Safe => write!(f, "Safe"),
            SafetyLevel::Moderate => write!(f, "Moderate"),
            SafetyLevel::Caution => write!(f, "Caution"),
        }
    }
}

/// A public meeting point on the safety map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyPoint {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub point_type: PointType,
    /// 0 to 10
    pub safety_score: u8,
    pub address: String,
    pub location: GeoPoint,
    pub description: String,
    pub features: Vec<String>,
    pub contact: String,
    pub hours: String,
    pub rating: f32,
}

impl SafetyPoint {
    pub fn safety_level(&self) -> SafetyLevel {
        SafetyLevel::from_score(self.safety_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_level_thresholds() {
        assert_eq!(SafetyLevel::from_score(10), SafetyLevel::VerySafe);
        assert_eq!(SafetyLevel::from_score(9), SafetyLevel::VerySafe);
        assert_eq!(SafetyLevel::from_score(8), SafetyLevel::Safe);
        assert_eq!(SafetyLevel::from_score(7), SafetyLevel::Safe);
        assert_eq!(SafetyLevel::from_score(5), SafetyLevel::Moderate);
        assert_eq!(SafetyLevel::from_score(4), SafetyLevel::Caution);
        assert_eq!(SafetyLevel::VerySafe.to_string(), "Very Safe");
    }

    #[test]
    fn language_codes() {
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn phrase_search_covers_both_scripts() {
        let entry = PhrasebookEntry {
            id: 1,
            english: "Hello".into(),
            assamese: "নমস্কাৰ".into(),
            phonetic: "Nomoskar".into(),
            category: PhraseCategory::Greetings,
        };
        assert!(entry.matches_search("HELL"));
        assert!(entry.matches_search("নমস্কাৰ"));
        assert!(!entry.matches_search("water"));
    }
}

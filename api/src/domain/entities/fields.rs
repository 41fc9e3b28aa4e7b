//! Form field values and per-field rules
//!
//! The value bag shared by every step of a wizard, and the checks a step runs
//! on its own fields before letting the user move on.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Metadata for an attached document. File contents never reach the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct UploadMeta {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A single form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Upload(UploadMeta),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Convert loosely-typed client JSON. Numbers become text so that numeric
    /// inputs keep the exact digits the user typed.
    pub fn from_json(value: serde_json::Value) -> Result<Self, String> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(FieldValue::Text(s)),
            Value::Bool(b) => Ok(FieldValue::Flag(b)),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(format!("list items must be strings, got {}", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            Value::Object(_) => serde_json::from_value::<UploadMeta>(value)
                .map(FieldValue::Upload)
                .map_err(|e| format!("invalid upload metadata: {}", e)),
            Value::Null => Err("null is not a field value".to_string()),
        }
    }

    /// Whether the value counts as filled in for a required field
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Upload(_) => true,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::List(_) => FieldKind::List,
            FieldValue::Upload(_) => FieldKind::Upload,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(true) => f.write_str("yes"),
            FieldValue::Flag(false) => f.write_str("no"),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Upload(meta) => write!(f, "{} ({} bytes)", meta.file_name, meta.size_bytes),
        }
    }
}

/// Field values keyed by field name, shared across all steps of a wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldBag(BTreeMap<String, FieldValue>);

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.insert(name.into(), value);
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.0.get(name).map(FieldValue::is_present).unwrap_or(false)
    }

    /// Trimmed text value, if the field holds non-blank text
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.0.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn upload(&self, name: &str) -> Option<&UploadMeta> {
        match self.0.get(name) {
            Some(FieldValue::Upload(meta)) => Some(meta),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub(crate) fn entry_list(&mut self, name: &str) -> Option<&mut Vec<String>> {
        let value = self
            .0
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match value {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The shape a field's value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Flag,
    List,
    Upload,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Flag => write!(f, "flag"),
            FieldKind::List => write!(f, "list"),
            FieldKind::Upload => write!(f, "upload"),
        }
    }
}

/// Format rule checked when a field is filled in
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Email,
    Phone,
    /// Indian bank branch code, e.g. `SBIN0001234`
    Ifsc,
    /// Non-negative whole number within optional bounds
    Number { min: Option<u32>, max: Option<u32> },
    MinLength(usize),
    OneOf(&'static [&'static str]),
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?\d{10,13}$").expect("valid phone regex"))
}

fn ifsc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid IFSC regex"))
}

impl FieldRule {
    /// Check a present value; returns a user-facing message on failure
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        let text = match value {
            FieldValue::Text(s) => s.trim(),
            // Rules only constrain text input
            _ => return Ok(()),
        };

        match self {
            FieldRule::Email => {
                if email_regex().is_match(text) {
                    Ok(())
                } else {
                    Err("must be a valid email address".to_string())
                }
            }
            FieldRule::Phone => {
                let digits: String = text
                    .chars()
                    .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
                    .collect();
                if phone_regex().is_match(&digits) {
                    Ok(())
                } else {
                    Err("must be a phone number with 10 to 13 digits".to_string())
                }
            }
            FieldRule::Ifsc => {
                if ifsc_regex().is_match(&text.to_uppercase()) {
                    Ok(())
                } else {
                    Err("must be an 11 character IFSC code".to_string())
                }
            }
            FieldRule::Number { min, max } => {
                let n: u32 = text
                    .parse()
                    .map_err(|_| "must be a whole number".to_string())?;
                if let Some(min) = min {
                    if n < *min {
                        return Err(format!("must be at least {}", min));
                    }
                }
                if let Some(max) = max {
                    if n > *max {
                        return Err(format!("must be at most {}", max));
                    }
                }
                Ok(())
            }
            FieldRule::MinLength(len) => {
                if text.chars().count() >= *len {
                    Ok(())
                } else {
                    Err(format!("must be at least {} characters", len))
                }
            }
            FieldRule::OneOf(options) => {
                if options.contains(&text) {
                    Ok(())
                } else {
                    Err(format!("must be one of: {}", options.join(", ")))
                }
            }
        }
    }
}

/// A field that failed its format rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_depends_on_kind() {
        assert!(!FieldValue::text("   ").is_present());
        assert!(FieldValue::text("Biren").is_present());
        assert!(!FieldValue::Flag(false).is_present());
        assert!(FieldValue::Flag(true).is_present());
        assert!(!FieldValue::List(vec![]).is_present());
        assert!(FieldValue::List(vec!["Hindi".into()]).is_present());
    }

    #[test]
    fn from_json_maps_each_shape() {
        assert_eq!(
            FieldValue::from_json(json!(1500)).unwrap(),
            FieldValue::text("1500")
        );
        assert_eq!(
            FieldValue::from_json(json!(["English", "Assamese"])).unwrap(),
            FieldValue::List(vec!["English".into(), "Assamese".into()])
        );
        assert!(matches!(
            FieldValue::from_json(json!({"file_name": "id.pdf", "size_bytes": 10})).unwrap(),
            FieldValue::Upload(_)
        ));
        assert!(FieldValue::from_json(json!(null)).is_err());
        assert!(FieldValue::from_json(json!([1, 2])).is_err());
    }

    #[test]
    fn email_rule() {
        let rule = FieldRule::Email;
        assert!(rule.check(&FieldValue::text("john@example.com")).is_ok());
        assert!(rule.check(&FieldValue::text("john@example")).is_err());
        assert!(rule.check(&FieldValue::text("not an email")).is_err());
    }

    #[test]
    fn phone_rule_ignores_separators() {
        let rule = FieldRule::Phone;
        assert!(rule.check(&FieldValue::text("+91 98765 43210")).is_ok());
        assert!(rule.check(&FieldValue::text("0361-2547100")).is_ok());
        assert!(rule.check(&FieldValue::text("12345")).is_err());
    }

    #[test]
    fn ifsc_rule_is_case_insensitive() {
        let rule = FieldRule::Ifsc;
        assert!(rule.check(&FieldValue::text("sbin0001234")).is_ok());
        assert!(rule.check(&FieldValue::text("SBIN1001234")).is_err());
    }

    #[test]
    fn number_rule_bounds() {
        let rule = FieldRule::Number {
            min: Some(1),
            max: Some(25),
        };
        assert!(rule.check(&FieldValue::text("10")).is_ok());
        assert!(rule.check(&FieldValue::text(" 25 ")).is_ok());
        assert!(rule.check(&FieldValue::text("0")).is_err());
        assert!(rule.check(&FieldValue::text("26")).is_err());
        assert!(rule.check(&FieldValue::text("ten")).is_err());
    }

    #[test]
    fn number_rule_wants_whole_finite_values() {
        let rule = FieldRule::Number {
            min: Some(0),
            max: None,
        };
        for bad in ["NaN", "inf", "infinity", "-1", "1500.75", "1e20", "99999999999"] {
            assert!(rule.check(&FieldValue::text(bad)).is_err(), "{} accepted", bad);
        }
        assert!(rule.check(&FieldValue::text("1500")).is_ok());
    }

    #[test]
    fn bag_accessors() {
        let mut bag = FieldBag::new();
        bag.insert("name", FieldValue::text("  Asha  "));
        bag.insert("terms", FieldValue::Flag(true));

        assert_eq!(bag.text("name"), Some("Asha"));
        assert!(bag.flag("terms"));
        assert!(bag.list("languages").is_empty());
        assert!(bag.upload("id_proof").is_none());
    }
}

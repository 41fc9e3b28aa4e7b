//! Post-experience feedback

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::experience::ExperienceId;
use crate::error::DomainError;

pub const MAX_COMMENT_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating, 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(format!("rating must be between 1 and 5, got {}", value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Feedback as submitted by a visitor
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub experience_id: ExperienceId,
    pub rating: Rating,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Validate submitted feedback. Blank comments are dropped.
    pub fn create(experience_id: ExperienceId, input: NewReview) -> Result<Self, DomainError> {
        let rating = Rating::try_from(input.rating).map_err(DomainError::Validation)?;

        let comment = input
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(c) = &comment {
            if c.chars().count() > MAX_COMMENT_CHARS {
                return Err(DomainError::Validation(format!(
                    "comment must be at most {} characters",
                    MAX_COMMENT_CHARS
                )));
            }
        }

        Ok(Self {
            id: ReviewId::new(),
            experience_id,
            rating,
            comment,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Rating::try_from(0).is_err());
        assert!(Rating::try_from(1).is_ok());
        assert!(Rating::try_from(5).is_ok());
        assert!(Rating::try_from(6).is_err());
    }

    #[test]
    fn create_drops_blank_comment() {
        let review = Review::create(
            ExperienceId::from("e1"),
            NewReview {
                rating: 4,
                comment: Some("   ".into()),
            },
        )
        .unwrap();
        assert_eq!(review.comment, None);
        assert_eq!(review.rating.value(), 4);
    }

    #[test]
    fn create_rejects_long_comment() {
        let result = Review::create(
            ExperienceId::from("e1"),
            NewReview {
                rating: 5,
                comment: Some("a".repeat(MAX_COMMENT_CHARS + 1)),
            },
        );
        assert!(result.is_err());
    }
}

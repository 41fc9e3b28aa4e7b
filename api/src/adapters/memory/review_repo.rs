//! In-memory review store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ExperienceId, Review};
use crate::domain::ports::ReviewRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct MemoryReviewRepository {
    reviews: RwLock<HashMap<ExperienceId, Vec<Review>>>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, review: &Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        let list = reviews.entry(review.experience_id.clone()).or_default();
        if list.iter().any(|r| r.id == review.id) {
            return Err(DomainError::AlreadyExists(format!("Review {}", review.id)));
        }
        list.push(review.clone());
        Ok(review.clone())
    }

    async fn list_for_experience(&self, id: &ExperienceId) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut list = reviews.get(id).cloned().unwrap_or_default();
        // Stored in arrival order
        list.reverse();
        Ok(list)
    }
}

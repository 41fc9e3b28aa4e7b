//! Feedback service
//!
//! Post-experience reviews, keyed by experience.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{ExperienceId, NewReview, Review};
use crate::domain::ports::{CatalogSource, ReviewRepository};
use crate::error::{AppError, DomainError};

#[derive(Debug, Clone, Serialize)]
pub struct ReviewList {
    pub experience_id: ExperienceId,
    pub count: usize,
    /// Mean rating, one decimal; absent when there are no reviews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f32>,
    pub reviews: Vec<Review>,
}

pub struct FeedbackService<C, R>
where
    C: CatalogSource,
    R: ReviewRepository,
{
    catalog: Arc<C>,
    reviews: Arc<R>,
}

impl<C, R> FeedbackService<C, R>
where
    C: CatalogSource,
    R: ReviewRepository,
{
    pub fn new(catalog: Arc<C>, reviews: Arc<R>) -> Self {
        Self { catalog, reviews }
    }

    pub async fn submit(
        &self,
        experience_id: &ExperienceId,
        input: NewReview,
    ) -> Result<Review, AppError> {
        self.ensure_exists(experience_id)?;

        let review = Review::create(experience_id.clone(), input)?;
        let saved = self.reviews.create(&review).await?;

        tracing::info!(
            experience_id = %experience_id,
            review_id = %saved.id,
            rating = saved.rating.value(),
            "Recorded feedback"
        );
        Ok(saved)
    }

    pub async fn list(&self, experience_id: &ExperienceId) -> Result<ReviewList, AppError> {
        self.ensure_exists(experience_id)?;

        let reviews = self.reviews.list_for_experience(experience_id).await?;
        let average = if reviews.is_empty() {
            None
        } else {
            let total: u32 = reviews.iter().map(|r| r.rating.value() as u32).sum();
            let mean = total as f32 / reviews.len() as f32;
            Some((mean * 10.0).round() / 10.0)
        };

        Ok(ReviewList {
            experience_id: experience_id.clone(),
            count: reviews.len(),
            average,
            reviews,
        })
    }

    fn ensure_exists(&self, id: &ExperienceId) -> Result<(), AppError> {
        match self.catalog.experience(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("Experience {}", id)).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryReviewRepository, StaticCatalog};

    fn service() -> FeedbackService<StaticCatalog, MemoryReviewRepository> {
        FeedbackService::new(
            Arc::new(StaticCatalog::guwahati().unwrap()),
            Arc::new(MemoryReviewRepository::new()),
        )
    }

    fn review(rating: u8, comment: Option<&str>) -> NewReview {
        NewReview {
            rating,
            comment: comment.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn submit_then_list_newest_first() {
        let service = service();
        let e3 = ExperienceId::from("e3");

        service.submit(&e3, review(4, Some("Lovely cruise"))).await.unwrap();
        service.submit(&e3, review(5, None)).await.unwrap();

        let list = service.list(&e3).await.unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.reviews[0].rating.value(), 5);
        assert_eq!(list.reviews[1].comment.as_deref(), Some("Lovely cruise"));
        assert_eq!(list.average, Some(4.5));
    }

    #[tokio::test]
    async fn rating_out_of_bounds_is_rejected() {
        let service = service();
        let e3 = ExperienceId::from("e3");

        for rating in [0, 6] {
            let result = service.submit(&e3, review(rating, None)).await;
            assert!(matches!(
                result,
                Err(AppError::Domain(DomainError::Validation(_)))
            ));
        }
        assert_eq!(service.list(&e3).await.unwrap().count, 0);
    }

    #[tokio::test]
    async fn unknown_experience_is_not_found() {
        let service = service();
        let missing = ExperienceId::from("e10");

        assert!(matches!(
            service.submit(&missing, review(5, None)).await,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
        assert!(matches!(
            service.list(&missing).await,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn empty_list_has_no_average() {
        let list = service().list(&ExperienceId::from("e1")).await.unwrap();
        assert_eq!(list.count, 0);
        assert!(list.average.is_none());
    }
}

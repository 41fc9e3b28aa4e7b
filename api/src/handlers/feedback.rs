//! Feedback handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::app::ReviewList;
use crate::domain::entities::{ExperienceId, NewReview, Review};
use crate::error::AppError;
use crate::AppState;

/// POST /experiences/:id/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = state
        .feedback_service
        .submit(&ExperienceId::new(id), input)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /experiences/:id/feedback
///
/// Reviews for an experience, newest first.
pub async fn list_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewList>, AppError> {
    let list = state.feedback_service.list(&ExperienceId::new(id)).await?;
    Ok(Json(list))
}

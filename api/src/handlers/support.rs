//! Language and safety helper handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::{PhrasebookView, SafetyPointView, Translation};
use crate::domain::entities::EmergencyContact;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PhrasebookQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct SafetyPointsQuery {
    #[serde(rename = "type")]
    pub point_type: Option<String>,
}

/// GET /support/phrases
pub async fn phrasebook(
    State(state): State<AppState>,
    Query(query): Query<PhrasebookQuery>,
) -> Result<Json<PhrasebookView>, AppError> {
    let view = state
        .support_service
        .phrases(&query.q, query.category.as_deref())?;
    Ok(Json(view))
}

/// POST /support/translate
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<Translation>, AppError> {
    let translation = state
        .support_service
        .translate(&request.text, &request.target)?;
    Ok(Json(translation))
}

/// GET /support/safety-points
pub async fn safety_points(
    State(state): State<AppState>,
    Query(query): Query<SafetyPointsQuery>,
) -> Result<Json<Vec<SafetyPointView>>, AppError> {
    let points = state
        .support_service
        .safety_points(query.point_type.as_deref())?;
    Ok(Json(points))
}

/// GET /support/emergency-contacts
pub async fn emergency_contacts(State(state): State<AppState>) -> Json<Vec<EmergencyContact>> {
    Json(state.support_service.emergency_contacts().to_vec())
}

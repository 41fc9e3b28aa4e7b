//! Wizard session handlers
//!
//! Start checkout, onboarding, sign-up and sign-in sessions, then drive them
//! field by field and step by step.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::negotiate;
use crate::app::SessionView;
use crate::domain::entities::{ExperienceId, FieldValue, FormKind, SessionId, UploadMeta};
use crate::error::AppError;
use crate::render::render_session;
use crate::AppState;

/// Request body for POST /checkout/:experience_id
#[derive(Debug, Default, Deserialize)]
pub struct StartCheckoutRequest {
    /// Slot picked on the detail view
    pub slot: Option<String>,
}

/// Request body for PATCH /sessions/:id/fields
#[derive(Debug, Deserialize)]
pub struct UpdateFieldsRequest {
    pub fields: Map<String, Value>,
}

/// Request body for POST /sessions/:id/fields/:field/toggle
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub value: String,
}

/// Request body for POST /sessions/:id/uploads
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub field: String,
    #[serde(flatten)]
    pub meta: UploadMeta,
}

type Created = (StatusCode, Json<SessionView>);

/// POST /checkout/:experience_id
///
/// Start checkout, carrying over the slot picked on the detail view.
pub async fn start_checkout(
    State(state): State<AppState>,
    Path(experience_id): Path<String>,
    body: Option<Json<StartCheckoutRequest>>,
) -> Result<Created, AppError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let view = state
        .wizard_service
        .start_checkout(&ExperienceId::new(experience_id), request.slot.as_deref())?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /onboarding
pub async fn start_onboarding(State(state): State<AppState>) -> Result<Created, AppError> {
    start(&state, FormKind::Onboarding)
}

/// POST /signup
pub async fn start_signup(State(state): State<AppState>) -> Result<Created, AppError> {
    start(&state, FormKind::Signup)
}

/// POST /signin
pub async fn start_signin(State(state): State<AppState>) -> Result<Created, AppError> {
    start(&state, FormKind::Signin)
}

fn start(state: &AppState, kind: FormKind) -> Result<Created, AppError> {
    let view = state.wizard_service.start(kind)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let view = state.wizard_service.view(&id)?;
    Ok(negotiate(&headers, view, render_session))
}

/// PATCH /sessions/:id/fields
///
/// Write several fields at once. Strings, booleans, string arrays and upload
/// objects are accepted; numbers are kept as typed text.
pub async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<UpdateFieldsRequest>,
) -> Result<Json<SessionView>, AppError> {
    let fields = request
        .fields
        .into_iter()
        .map(|(name, raw)| {
            FieldValue::from_json(raw)
                .map(|value| (name.clone(), value))
                .map_err(|e| AppError::BadRequest(format!("{}: {}", name, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let view = state.wizard_service.update_fields(&id, fields)?;
    Ok(Json(view))
}

/// POST /sessions/:id/fields/:field/toggle
pub async fn toggle_item(
    State(state): State<AppState>,
    Path((id, field)): Path<(SessionId, String)>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.wizard_service.toggle(&id, &field, &request.value)?;
    Ok(Json(view))
}

/// POST /sessions/:id/uploads
///
/// Attach document metadata. Files over the size limit are rejected and the
/// field keeps its previous value.
pub async fn attach_upload(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .wizard_service
        .attach_upload(&id, &request.field, request.meta)?;
    Ok(Json(view))
}

/// POST /sessions/:id/advance
///
/// Validate the current step and move on; from the last step this submits.
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.wizard_service.advance(&id)?))
}

/// POST /sessions/:id/back
///
/// Step back; from the first step this cancels and discards the session.
pub async fn back(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.wizard_service.back(&id)?))
}

/// DELETE /sessions/:id
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    state.wizard_service.close(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

//! Unified error types for the Heritage API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `WizardError`: Step-wizard navigation and field errors
//! - `GatewayError`: Submission collaborator errors (checkout, auth, applications)
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{FieldIssue, FieldKind};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Step-wizard errors
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(
        "Step incomplete: {} missing, {} invalid",
        .missing.len(),
        .invalid.len()
    )]
    StepIncomplete {
        missing: Vec<String>,
        invalid: Vec<FieldIssue>,
    },

    #[error("Upload too large: {field} is {size} bytes, limit is {limit}")]
    UploadTooLarge { field: String, size: u64, limit: u64 },

    #[error("Session ended")]
    SessionEnded,

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} expects a {expected} value")]
    WrongKind { field: String, expected: FieldKind },
}

/// Submission collaborator errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The collaborator answered and said no
    #[error("{0}")]
    Refused(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Wizard(#[from] WizardError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldIssue>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;

        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Wizard(e) => match e {
                WizardError::StepIncomplete { missing, invalid } => {
                    let mut issues: Vec<FieldIssue> = missing
                        .iter()
                        .map(|field| FieldIssue {
                            field: field.clone(),
                            message: "is required".to_string(),
                        })
                        .collect();
                    issues.extend(invalid.iter().cloned());
                    fields = Some(issues);
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "Step incomplete",
                        Some(e.to_string()),
                    )
                }
                WizardError::UploadTooLarge { .. } => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Upload too large",
                    Some(e.to_string()),
                ),
                WizardError::SessionEnded => (StatusCode::CONFLICT, "Session ended", None),
                WizardError::UnknownField(_) | WizardError::WrongKind { .. } => {
                    (StatusCode::BAD_REQUEST, "Bad field", Some(e.to_string()))
                }
            },
            AppError::Gateway(e) => {
                tracing::error!("Gateway error: {}", e);
                (StatusCode::BAD_GATEWAY, "Upstream service error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        });

        (status, body).into_response()
    }
}

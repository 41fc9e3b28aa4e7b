//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.
//! Catalog and session views support content negotiation:
//! Accept: application/json for JSON, otherwise text/plain.

pub mod experiences;
pub mod feedback;
pub mod sessions;
pub mod support;
pub mod vendors;

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub use experiences::{get_experience, get_facets, get_phrases, list_experiences};
pub use feedback::{list_feedback, submit_feedback};
pub use sessions::{
    advance, attach_upload, back, close_session, get_session, start_checkout, start_onboarding,
    start_signin, start_signup, toggle_item, update_fields,
};
pub use support::{emergency_contacts, phrasebook, safety_points, translate};
pub use vendors::get_vendor;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// JSON when asked for, otherwise the plain-text rendering
fn negotiate<T, F>(headers: &HeaderMap, value: T, render: F) -> Response
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if wants_json(headers) {
        Json(value).into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render(&value),
        )
            .into_response()
    }
}

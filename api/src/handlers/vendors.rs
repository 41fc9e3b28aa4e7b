//! Vendor handlers

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};

use super::negotiate;
use crate::domain::entities::VendorId;
use crate::error::AppError;
use crate::render::render_vendor;
use crate::AppState;

/// GET /vendors/:id
///
/// Vendor profile with the experiences they host.
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let profile = state.catalog_service.vendor_profile(&VendorId::new(id))?;
    Ok(negotiate(&headers, profile, render_vendor))
}

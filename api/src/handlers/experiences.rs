//! Experience handlers
//!
//! Listing, detail and phrase endpoints over the catalog.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::Deserialize;

use super::negotiate;
use crate::app::{Facets, PhraseList};
use crate::domain::entities::{ExperienceFilter, ExperienceId, Facet};
use crate::error::AppError;
use crate::render::{render_experience, render_listing};
use crate::AppState;

/// Query parameters for the listing
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub duration: Option<String>,
}

impl From<ListingQuery> for ExperienceFilter {
    fn from(query: ListingQuery) -> Self {
        ExperienceFilter::new(
            query.q,
            Facet::parse(query.category.as_deref()),
            Facet::parse(query.duration.as_deref()),
        )
    }
}

/// GET /experiences
///
/// Filtered listing. An empty result carries a relaxation suggestion.
pub async fn list_experiences(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let listing = state.catalog_service.browse(query.into())?;
    Ok(negotiate(&headers, listing, render_listing))
}

/// GET /experiences/facets
pub async fn get_facets(State(state): State<AppState>) -> Json<Facets> {
    Json(state.catalog_service.facets())
}

/// GET /experiences/:id
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let detail = state.catalog_service.experience(&ExperienceId::new(id))?;
    Ok(negotiate(&headers, detail, render_experience))
}

/// GET /experiences/:id/phrases
pub async fn get_phrases(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PhraseList>, AppError> {
    let phrases = state.catalog_service.phrases(&ExperienceId::new(id))?;
    Ok(Json(phrases))
}

//! Handlers for catalog sites.
//!
//! Submissions land pending; listing and random sampling only ever see
//! approved sites. Lookup by id sees everything.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::submission::SiteSubmission;

use crate::error::AppResult;
use crate::query::{PageParams, RandomParams};
use crate::response::SubmitResponse;
use crate::state::AppState;

/// POST /api/submit
///
/// Validate and store a new site pending moderation.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<SiteSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(submission) = body?;
    let site = state.catalog.submit(submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Site submitted successfully",
            site,
        }),
    ))
}

/// GET /api/sites?page=1&limit=20
///
/// List approved sites, newest first.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let page = state.catalog.list_page(PageRequest::from(params)).await?;
    Ok(Json(page))
}

/// GET /api/sites/{id}
///
/// Get a single site by id, approved or not.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let site = state.catalog.get_by_id(&id).await?;
    Ok(Json(site))
}

/// GET /api/random?category=&year=
///
/// A uniformly random approved site, optionally filtered.
pub async fn random(
    State(state): State<AppState>,
    params: Result<Query<RandomParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let filter = SiteFilter::try_from(params)?;
    let site = state.catalog.random_sample(&filter).await?;
    Ok(Json(site))
}

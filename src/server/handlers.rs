//! HTTP handlers for the contact routes.
//!
//! Handlers stay thin: they unpack the request, call the submission service
//! and wrap the result in the response envelope. Every failure is rendered
//! through [`ApiError`].

use super::client_addr::ClientAddr;
use super::response::ApiError;
use super::AppState;
use crate::error::SubmissionError;
use crate::models::{
    ContactListResponse, ContactResponse, ContactSubmissionCreate, StatusUpdateResponse,
    SubmissionEnvelope,
};
use crate::services::{ListParams, DEFAULT_PAGE_SIZE};
use crate::validation::FieldError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

const CREATE_FAILED: &str = "Failed to submit contact form. Please try again later.";
const LIST_FAILED: &str = "Failed to fetch contact submissions";
const GET_FAILED: &str = "Failed to fetch contact submission";
const UPDATE_FAILED: &str = "Failed to update submission status";

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
}

/// Query parameters accepted by the status update endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: Option<String>,
}

fn schema_error(field: &str, message: impl Into<String>, failure: &'static str) -> ApiError {
    ApiError::new(
        SubmissionError::Schema(vec![FieldError::new(field, message)]),
        failure,
    )
}

/// GET /api
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// GET /api/health
///
/// Reports store reachability together with the request counters.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let metrics = state.metrics.snapshot();

    match state.service.check_store().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "store": "up", "metrics": metrics })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "store": "down", "metrics": metrics })),
        ),
    }
}

/// POST /api/contact
pub async fn create_submission(
    State(state): State<AppState>,
    ClientAddr(ip_address): ClientAddr,
    payload: Result<Json<ContactSubmissionCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| schema_error("body", rejection.body_text(), CREATE_FAILED))?;

    let submission = state
        .service
        .create_submission(payload, ip_address)
        .await
        .map_err(|e| ApiError::new(e, CREATE_FAILED))?;

    state.metrics.track_submission_created();
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse::created(&submission.id)),
    ))
}

/// GET /api/contact
pub async fn list_submissions(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ContactListResponse>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| schema_error("query", rejection.body_text(), LIST_FAILED))?;

    let params = ListParams {
        status: query.status,
        limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        skip: query.skip.unwrap_or(0),
    };

    let page = state
        .service
        .list_submissions(params)
        .await
        .map_err(|e| ApiError::new(e, LIST_FAILED))?;

    Ok(Json(ContactListResponse::from(page)))
}

/// GET /api/contact/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmissionEnvelope>, ApiError> {
    let submission = state
        .service
        .get_submission(&id)
        .await
        .map_err(|e| ApiError::new(e, GET_FAILED))?;

    Ok(Json(SubmissionEnvelope {
        success: true,
        submission,
    }))
}

/// PATCH /api/contact/{id}/status?status=...
pub async fn update_submission_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<StatusUpdateResponse>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| schema_error("query", rejection.body_text(), UPDATE_FAILED))?;
    let status = query
        .status
        .ok_or_else(|| schema_error("status", "Field required", UPDATE_FAILED))?;

    state
        .service
        .update_status(&id, &status)
        .await
        .map_err(|e| ApiError::new(e, UPDATE_FAILED))?;

    Ok(Json(StatusUpdateResponse::updated()))
}

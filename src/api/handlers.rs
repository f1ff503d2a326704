//! HTTP request handlers for the UAV rating engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::RateRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Response header carrying the per-request correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rate", post(rate_handler))
        .route("/parameters", get(parameters_handler))
        .with_state(state)
}

fn with_correlation_id(correlation_id: Uuid, response: impl IntoResponse) -> Response {
    (
        [(
            HeaderName::from_static(CORRELATION_ID_HEADER),
            correlation_id.to_string(),
        )],
        response,
    )
        .into_response()
}

fn json_response<T: Serialize>(status: StatusCode, correlation_id: Uuid, body: T) -> Response {
    with_correlation_id(
        correlation_id,
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        ),
    )
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /rate endpoint.
///
/// Accepts a fleet input document and returns the rated fleet.
async fn rate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rating request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let api_error = ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_to_error(rejection, correlation_id),
            };
            return with_correlation_id(correlation_id, api_error);
        }
    };

    let start_time = Instant::now();
    match state.engine().rate_fleet(&request.fleet, request.options()) {
        Ok(rated) => {
            info!(
                correlation_id = %correlation_id,
                drones_count = rated.drones.len(),
                cameras_count = rated.detachable_cameras.len(),
                gross_total = %rated.gross_prem.total,
                duration_us = start_time.elapsed().as_micros(),
                "Rating completed successfully"
            );
            json_response(StatusCode::OK, correlation_id, rated)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rating failed"
            );
            let api_error: ApiErrorResponse = err.into();
            with_correlation_id(correlation_id, api_error)
        }
    }
}

/// Handler for GET /parameters endpoint.
///
/// Returns the rate parameters the engine was loaded with.
async fn parameters_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Serving rate parameters");
    json_response(StatusCode::OK, correlation_id, state.engine().parameters())
}

//! HTTP request handlers for the Reimbursement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_with_audit;
use crate::error::{EngineError, EngineResult};
use crate::models::{ReimbursementResult, Trip};

use super::request::{BatchCalculationRequest, CalculationRequest};
use super::response::{ApiError, ApiErrorResponse, BatchCalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(batch_calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a single trip and returns the audited reimbursement result.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let trip: Trip = request.into();
    match calculate_with_audit(&trip) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                days = trip.days,
                reimbursement = %result.totals.reimbursement,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /calculate/batch endpoint.
///
/// Calculates every trip in the request and returns the results in order
/// along with the total rounded reimbursement.
async fn batch_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let max = state.config().limits.max_batch_size;
    match perform_batch(&request.trips, max) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                trips_count = response.results.len(),
                total_reimbursement = %response.total_reimbursement,
                duration_us = start_time.elapsed().as_micros(),
                "Batch calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Calculates a batch of trips, enforcing the configured size limit.
fn perform_batch(
    trips: &[CalculationRequest],
    max_batch_size: usize,
) -> EngineResult<BatchCalculationResponse> {
    if trips.len() > max_batch_size {
        return Err(EngineError::BatchTooLarge {
            size: trips.len(),
            max: max_batch_size,
        });
    }

    let results = trips
        .iter()
        .map(|req| calculate_with_audit(&Trip::from(*req)))
        .collect::<EngineResult<Vec<ReimbursementResult>>>()?;

    let total_reimbursement: Decimal = results.iter().map(|r| r.totals.reimbursement).sum();

    Ok(BatchCalculationResponse {
        results,
        total_reimbursement,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a `400` error body.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    };

    let api_error = ApiErrorResponse::bad_request(error);
    json_response(api_error.status, api_error.error)
}

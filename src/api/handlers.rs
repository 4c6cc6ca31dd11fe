//! HTTP request handlers for the ESIC calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::models::WageInputs;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, SchemeInfo};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/scheme", get(scheme_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Normalizes the submitted amounts and returns the full calculation record.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let inputs = WageInputs::from(&request);
    let calculation = calculate(inputs, state.config().rates());

    info!(
        correlation_id = %correlation_id,
        calculation_id = %calculation.calculation_id,
        total_gross = %calculation.result.total_gross,
        is_coverable = calculation.result.is_coverable,
        employee_contribution = %calculation.result.employee_contribution,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(calculation),
    )
        .into_response()
}

/// Handler for GET /scheme endpoint.
///
/// Returns the scheme metadata and the rates calculations run against.
async fn scheme_handler(State(state): State<AppState>) -> Json<SchemeInfo> {
    let config = state.config();
    Json(SchemeInfo {
        scheme: config.scheme().clone(),
        rates: *config.rates(),
    })
}

/// Maps a body that could not be read into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("unknown field") {
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
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::missing_content_type()
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

//! HTTP request handlers for the Tour Pricing Engine API.
//!
//! This module contains the handler functions for the pricing endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_itinerary_pricing, resolve_template_pricing};
use crate::models::ItineraryDay;

use super::request::{ItineraryPricingRequest, TemplatePricingRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pricing/template", post(template_pricing_handler))
        .route("/pricing/itinerary", post(itinerary_pricing_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection to a typed API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for `POST /pricing/template`.
///
/// Resolves the applicable price list for the requested template, dates,
/// meal plan, and room count, and prices the selected components.
async fn template_pricing_handler(
    State(state): State<AppState>,
    payload: Result<Json<TemplatePricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing template pricing request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let criteria = request.criteria();
    let selections = request.selections();
    let entries = state.catalog().entries_for_template(&criteria.template_id);

    match resolve_template_pricing(&entries, &criteria, &selections, request.markup_percent) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                template_id = %criteria.template_id,
                components = selections.len(),
                total_cost = %result.total_cost,
                "Template pricing resolved"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result.round_to_cents()),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                template_id = %criteria.template_id,
                error = %err,
                "Template pricing failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for `POST /pricing/itinerary`.
///
/// Prices an itinerary's room and transport requirements from the
/// catalog's rate rows. Rate misses do not fail the request; they are
/// surfaced on the result's `failed_lookups`.
async fn itinerary_pricing_handler(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryPricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing itinerary pricing request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_error(correlation_id, rejection),
    };

    let days: Vec<ItineraryDay> = request.days.into_iter().map(Into::into).collect();

    match compute_itinerary_pricing(&days, state.catalog(), request.markup_percent) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                days = days.len(),
                total_cost = %result.total_cost,
                failed_lookups = result.failed_lookups.len(),
                "Itinerary pricing computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result.round_to_cents()),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Itinerary pricing failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

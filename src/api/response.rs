//! Response types for the Tour Pricing Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CatalogNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog error",
                    format!("Catalog file not found: {}", path),
                ),
            },
            EngineError::CatalogParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CATALOG_ERROR",
                    "Catalog load error",
                    format!("Failed to load {}: {}", path, message),
                ),
            },
            EngineError::NoMatchingPeriod {
                template_id,
                date_from,
                date_to,
            } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_MATCHING_PERIOD",
                    format!(
                        "No price list for template '{}' covering {} to {}",
                        template_id, date_from, date_to
                    ),
                    "Widen the travel dates or adjust the meal plan or room count",
                ),
            },
            EngineError::AmbiguousPeriod { entry_ids } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "AMBIGUOUS_PERIOD",
                    "Multiple price lists match the requested criteria",
                    format!("Conflicting entries: {}", entry_ids.join(", ")),
                ),
            },
            EngineError::EmptySelection => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("EMPTY_SELECTION", "No price components selected"),
            },
            EngineError::ComponentNotFound {
                entry_id,
                component_id,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "COMPONENT_NOT_FOUND",
                    format!("Component '{}' not found", component_id),
                    format!("Price list '{}' carries no such component", entry_id),
                ),
            },
            rate_error @ EngineError::RoomRateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("RATE_NOT_FOUND", rate_error.to_string()),
            },
            rate_error @ EngineError::VehicleRateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("RATE_NOT_FOUND", rate_error.to_string()),
            },
            EngineError::InvalidMarkup { percent } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MARKUP",
                    format!("Invalid markup percentage: {}", percent),
                    "Markup must be zero or positive, or omitted entirely",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_no_matching_period_maps_to_404() {
        let error = EngineError::NoMatchingPeriod {
            template_id: "tpl_golden_triangle".to_string(),
            date_from: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 11, 27).unwrap(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "NO_MATCHING_PERIOD");
    }

    #[test]
    fn test_ambiguous_period_maps_to_409_with_ids() {
        let error = EngineError::AmbiguousPeriod {
            entry_ids: vec!["pl_a".to_string(), "pl_b".to_string()],
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert!(response.error.details.unwrap().contains("pl_a, pl_b"));
    }

    #[test]
    fn test_empty_selection_maps_to_400() {
        let response: ApiErrorResponse = EngineError::EmptySelection.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "EMPTY_SELECTION");
    }

    #[test]
    fn test_rate_not_found_maps_to_400() {
        let error = EngineError::VehicleRateNotFound {
            vehicle_type_id: "veh_suv".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "RATE_NOT_FOUND");
        assert!(response.error.message.contains("veh_suv"));
    }

    #[test]
    fn test_catalog_errors_map_to_500() {
        let error = EngineError::CatalogNotFound {
            path: "/missing".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CATALOG_ERROR");
    }
}

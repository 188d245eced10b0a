//! Error types for the Tour Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving and aggregating
//! prices. Errors are values that callers branch on; nothing in the engine
//! uses panics or retries for control flow.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::RateMiss;

/// The main error type for the Tour Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use tour_pricing_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/catalog".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/catalog");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed or failed validation.
    #[error("Failed to load catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to load.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// No catalog entry satisfies the selection criteria.
    ///
    /// User-correctable: widen the dates or change the meal plan or room
    /// count. The engine never auto-retries.
    #[error(
        "No price list for template '{template_id}' covering {date_from} to {date_to}"
    )]
    NoMatchingPeriod {
        /// The requested template id.
        template_id: String,
        /// The start of the requested travel window.
        date_from: NaiveDate,
        /// The end of the requested travel window.
        date_to: NaiveDate,
    },

    /// Two or more catalog entries satisfy the same selection criteria.
    ///
    /// The engine never guesses among overlapping catalog windows; the
    /// conflicting entry ids are surfaced so the catalog can be corrected
    /// upstream.
    #[error("Ambiguous price period: {} entries match ({})", .entry_ids.len(), .entry_ids.join(", "))]
    AmbiguousPeriod {
        /// Ids of every entry that satisfied the criteria.
        entry_ids: Vec<String>,
    },

    /// Template mode was invoked with zero selected components.
    #[error("No price components selected")]
    EmptySelection,

    /// A selection referenced a component id not present on the entry.
    #[error("Component '{component_id}' not found on price list '{entry_id}'")]
    ComponentNotFound {
        /// The id of the matched price list.
        entry_id: String,
        /// The component id that was not found.
        component_id: String,
    },

    /// No nightly rate exists for a room lookup tuple.
    #[error(
        "No nightly rate for room '{room_type_id}' occupancy '{occupancy_type_id}' meal plan '{}' on {date}",
        .meal_plan_id.as_deref().unwrap_or("none")
    )]
    RoomRateNotFound {
        /// The room type that was looked up.
        room_type_id: String,
        /// The occupancy type that was looked up.
        occupancy_type_id: String,
        /// The meal plan that was looked up, if any.
        meal_plan_id: Option<String>,
        /// The night the rate was requested for.
        date: NaiveDate,
    },

    /// No unit rate exists for a vehicle lookup tuple.
    #[error("No rate for vehicle '{vehicle_type_id}' on {date}")]
    VehicleRateNotFound {
        /// The vehicle type that was looked up.
        vehicle_type_id: String,
        /// The day the rate was requested for.
        date: NaiveDate,
    },

    /// A negative markup percentage was supplied.
    #[error("Invalid markup percentage: {percent}")]
    InvalidMarkup {
        /// The rejected percentage.
        percent: Decimal,
    },
}

impl From<RateMiss> for EngineError {
    fn from(miss: RateMiss) -> Self {
        match miss {
            RateMiss::Room {
                room_type_id,
                occupancy_type_id,
                meal_plan_id,
                date,
                ..
            } => EngineError::RoomRateNotFound {
                room_type_id,
                occupancy_type_id,
                meal_plan_id,
                date,
            },
            RateMiss::Vehicle {
                vehicle_type_id,
                date,
                ..
            } => EngineError::VehicleRateNotFound {
                vehicle_type_id,
                date,
            },
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

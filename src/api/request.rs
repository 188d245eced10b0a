//! Request types for the Tour Pricing Engine API.
//!
//! This module defines the JSON request structures for the two pricing
//! endpoints and their conversions into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{ComponentSelection, MatchCriteria};
use crate::models::{ItineraryDay, RoomRequirement, TransportRequirement};

/// Request body for the `POST /pricing/template` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePricingRequest {
    /// The tour template to price.
    pub template_id: String,
    /// First travel date (inclusive).
    pub date_from: NaiveDate,
    /// Last travel date (inclusive).
    pub date_to: NaiveDate,
    /// The requested meal plan.
    pub meal_plan_id: String,
    /// The requested room-count bucket.
    pub room_count: u32,
    /// The components chosen by the user, with quantities.
    pub selections: Vec<ComponentSelectionRequest>,
    /// Optional markup percentage held by the UI.
    #[serde(default)]
    pub markup_percent: Option<Decimal>,
}

impl TemplatePricingRequest {
    /// Extracts the matching criteria from the request.
    pub fn criteria(&self) -> MatchCriteria {
        MatchCriteria {
            template_id: self.template_id.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
            meal_plan_id: self.meal_plan_id.clone(),
            room_count: self.room_count,
        }
    }

    /// Extracts the component selections from the request.
    pub fn selections(&self) -> Vec<ComponentSelection> {
        self.selections.iter().cloned().map(Into::into).collect()
    }
}

/// A selected component in a template pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSelectionRequest {
    /// The id of the component to price.
    pub component_id: String,
    /// Number of rooms, defaulting to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Request body for the `POST /pricing/itinerary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPricingRequest {
    /// The itinerary days with their accommodation and transport needs.
    pub days: Vec<ItineraryDayRequest>,
    /// Optional markup percentage held by the UI.
    #[serde(default)]
    pub markup_percent: Option<Decimal>,
}

/// One itinerary day in a pricing request.
///
/// Requirements are nested under their day; the conversion into domain
/// types stamps the day number onto each requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDayRequest {
    /// The 1-based day number.
    pub day_number: u32,
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Number of nights the day's stay covers, defaulting to 1.
    #[serde(default = "default_nights")]
    pub nights: u32,
    /// Room requirements for the day.
    #[serde(default)]
    pub rooms: Vec<RoomRequirementRequest>,
    /// Transport requirements for the day.
    #[serde(default)]
    pub transport: Vec<TransportRequirementRequest>,
}

/// A room requirement in a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRequirementRequest {
    /// The room type to price.
    pub room_type_id: String,
    /// The occupancy type to price.
    pub occupancy_type_id: String,
    /// The meal plan to price, if the rate is meal-plan specific.
    #[serde(default)]
    pub meal_plan_id: Option<String>,
    /// Number of rooms, defaulting to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// A transport requirement in a pricing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportRequirementRequest {
    /// The vehicle type to price.
    pub vehicle_type_id: String,
    /// Number of vehicles, defaulting to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn default_nights() -> u32 {
    1
}

impl From<ComponentSelectionRequest> for ComponentSelection {
    fn from(req: ComponentSelectionRequest) -> Self {
        ComponentSelection {
            component_id: req.component_id,
            quantity: req.quantity,
        }
    }
}

impl From<ItineraryDayRequest> for ItineraryDay {
    fn from(req: ItineraryDayRequest) -> Self {
        let day_number = req.day_number;
        ItineraryDay {
            day_number,
            date: req.date,
            nights: req.nights,
            rooms: req
                .rooms
                .into_iter()
                .map(|room| RoomRequirement {
                    room_type_id: room.room_type_id,
                    occupancy_type_id: room.occupancy_type_id,
                    meal_plan_id: room.meal_plan_id,
                    quantity: room.quantity,
                    day_number,
                })
                .collect(),
            transport: req
                .transport
                .into_iter()
                .map(|transport| TransportRequirement {
                    vehicle_type_id: transport.vehicle_type_id,
                    quantity: transport.quantity,
                    day_number,
                })
                .collect(),
        }
    }
}

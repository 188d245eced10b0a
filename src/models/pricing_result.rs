//! Pricing result models.
//!
//! This module contains the [`PricingResult`] type and its associated
//! structures: per-day summaries, the applied markup record, and the
//! [`RateMiss`] entries that mark a partial result.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PricedLineItem;

/// Line items grouped under one itinerary day with their exact sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The 1-based itinerary day number.
    pub day_number: u32,
    /// The day's line items, in pricing order.
    pub line_items: Vec<PricedLineItem>,
    /// Sum of `total_price` across the day's items.
    pub day_total: Decimal,
}

/// Record of a markup that was applied to the base total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMarkup {
    /// The markup percentage that was applied.
    pub percentage: Decimal,
    /// The resulting markup amount, `base_total * percentage / 100`.
    pub amount: Decimal,
}

/// A raw-mode rate lookup that found no rate.
///
/// A miss aborts only the affected requirement's pricing; the rest of the
/// itinerary is still priced and aggregated, and the misses are surfaced on
/// the result so the caller knows exactly which tuples were absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateMiss {
    /// A room rate lookup miss.
    Room {
        /// The room type that was looked up.
        room_type_id: String,
        /// The occupancy type that was looked up.
        occupancy_type_id: String,
        /// The meal plan that was looked up, if any.
        meal_plan_id: Option<String>,
        /// The night no rate was found for.
        date: chrono::NaiveDate,
        /// The itinerary day the requirement belonged to.
        day_number: u32,
    },
    /// A vehicle rate lookup miss.
    Vehicle {
        /// The vehicle type that was looked up.
        vehicle_type_id: String,
        /// The day no rate was found for.
        date: chrono::NaiveDate,
        /// The itinerary day the requirement belonged to.
        day_number: u32,
    },
}

impl fmt::Display for RateMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateMiss::Room {
                room_type_id,
                occupancy_type_id,
                meal_plan_id,
                date,
                day_number,
            } => write!(
                f,
                "day {day_number}: room '{room_type_id}' occupancy '{occupancy_type_id}' meal plan '{}' on {date}",
                meal_plan_id.as_deref().unwrap_or("none")
            ),
            RateMiss::Vehicle {
                vehicle_type_id,
                date,
                day_number,
            } => write!(f, "day {day_number}: vehicle '{vehicle_type_id}' on {date}"),
        }
    }
}

/// The complete result of a pricing computation.
///
/// A value snapshot constructed fresh per computation; it references no
/// external entity by identity and is immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub computed_at: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// Grand total including any markup.
    pub total_cost: Decimal,
    /// Sum of accommodation-tagged and package items.
    pub accommodation_subtotal: Decimal,
    /// Sum of transport-tagged items.
    pub transport_subtotal: Decimal,
    /// Per-day summaries in ascending day order.
    pub day_breakdown: Vec<DaySummary>,
    /// Template-level items that are not day-scoped.
    pub package_items: Vec<PricedLineItem>,
    /// The markup that was applied, if any.
    pub applied_markup: Option<AppliedMarkup>,
    /// Raw-mode lookups that found no rate. Empty for a complete result.
    pub failed_lookups: Vec<RateMiss>,
}

impl PricingResult {
    /// Returns true if every requested requirement was priced.
    pub fn is_complete(&self) -> bool {
        self.failed_lookups.is_empty()
    }

    /// Rounds every monetary field to two decimal places.
    ///
    /// Intermediate aggregation is exact; presentation rounding happens once,
    /// at the boundary, via this method.
    pub fn round_to_cents(mut self) -> Self {
        for day in &mut self.day_breakdown {
            for item in &mut day.line_items {
                item.unit_price = item.unit_price.round_dp(2);
                item.total_price = item.total_price.round_dp(2);
            }
            day.day_total = day.day_total.round_dp(2);
        }
        for item in &mut self.package_items {
            item.unit_price = item.unit_price.round_dp(2);
            item.total_price = item.total_price.round_dp(2);
        }
        if let Some(markup) = &mut self.applied_markup {
            markup.amount = markup.amount.round_dp(2);
        }
        self.accommodation_subtotal = self.accommodation_subtotal.round_dp(2);
        self.transport_subtotal = self.transport_subtotal.round_dp(2);
        self.total_cost = self.total_cost.round_dp(2);
        self
    }
}

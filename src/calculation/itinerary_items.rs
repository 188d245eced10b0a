//! Raw-mode line item calculation.
//!
//! Prices an itinerary's room and transport requirements from per-night and
//! per-unit rate lookups. The rate collaborator sits behind the
//! [`RateLookup`] trait so callers can back it with a database, a remote
//! service, or an in-memory snapshot; the engine's own logic performs no
//! I/O beyond invoking it.
//!
//! A missing rate aborts only the affected requirement: it becomes a
//! [`RateMiss`] on the outcome and the rest of the itinerary is still
//! priced.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    ItineraryDay, LineCategory, PricedLineItem, RateMiss, RoomRequirement, TransportRequirement,
};

/// The rate collaborator for raw-mode pricing.
///
/// Implementations must be read-only for the duration of a computation;
/// the engine treats the lookup as referentially transparent.
pub trait RateLookup {
    /// Returns the nightly rate for a room tuple, if one exists.
    fn room_rate(
        &self,
        room_type_id: &str,
        occupancy_type_id: &str,
        meal_plan_id: Option<&str>,
        date: NaiveDate,
    ) -> Option<Decimal>;

    /// Returns the per-unit rate for a vehicle tuple, if one exists.
    fn vehicle_rate(&self, vehicle_type_id: &str, date: NaiveDate) -> Option<Decimal>;
}

/// The outcome of pricing an itinerary: the successfully priced items plus
/// the lookups that found no rate.
#[derive(Debug, Clone, Default)]
pub struct ItineraryPricingOutcome {
    /// Every line item that was priced.
    pub line_items: Vec<PricedLineItem>,
    /// Every lookup tuple that had no rate.
    pub failed_lookups: Vec<RateMiss>,
}

/// Prices one room requirement: the nightly rate summed over every night
/// the day's stay covers, times the room quantity.
///
/// Fails with the [`RateMiss`] of the first absent night.
pub fn price_room_requirement(
    day: &ItineraryDay,
    requirement: &RoomRequirement,
    rates: &dyn RateLookup,
) -> Result<PricedLineItem, RateMiss> {
    let mut stay_cost = Decimal::ZERO;
    for night in day.night_dates() {
        let rate = rates
            .room_rate(
                &requirement.room_type_id,
                &requirement.occupancy_type_id,
                requirement.meal_plan_id.as_deref(),
                night,
            )
            .ok_or_else(|| RateMiss::Room {
                room_type_id: requirement.room_type_id.clone(),
                occupancy_type_id: requirement.occupancy_type_id.clone(),
                meal_plan_id: requirement.meal_plan_id.clone(),
                date: night,
                day_number: requirement.day_number,
            })?;
        stay_cost += rate;
    }

    // Occupancy is already encoded in the rate-row key, so the
    // label-driven multiplier never applies in raw mode.
    Ok(PricedLineItem::priced(
        Some(requirement.day_number),
        format!(
            "{} ({})",
            requirement.room_type_id, requirement.occupancy_type_id
        ),
        LineCategory::Accommodation,
        requirement.quantity,
        stay_cost,
        1,
    ))
}

/// Prices one transport requirement: the unit rate on the day's date times
/// the vehicle quantity.
pub fn price_transport_requirement(
    day: &ItineraryDay,
    requirement: &TransportRequirement,
    rates: &dyn RateLookup,
) -> Result<PricedLineItem, RateMiss> {
    let rate = rates
        .vehicle_rate(&requirement.vehicle_type_id, day.date)
        .ok_or_else(|| RateMiss::Vehicle {
            vehicle_type_id: requirement.vehicle_type_id.clone(),
            date: day.date,
            day_number: requirement.day_number,
        })?;

    Ok(PricedLineItem::priced(
        Some(requirement.day_number),
        requirement.vehicle_type_id.clone(),
        LineCategory::Transport,
        requirement.quantity,
        rate,
        1,
    ))
}

/// Prices every requirement of every itinerary day, recovering per-requirement
/// rate misses into the outcome's `failed_lookups`.
pub fn price_itinerary(days: &[ItineraryDay], rates: &dyn RateLookup) -> ItineraryPricingOutcome {
    let mut outcome = ItineraryPricingOutcome::default();

    for day in days {
        for room in &day.rooms {
            match price_room_requirement(day, room, rates) {
                Ok(item) => outcome.line_items.push(item),
                Err(miss) => outcome.failed_lookups.push(miss),
            }
        }
        for transport in &day.transport {
            match price_transport_requirement(day, transport, rates) {
                Ok(item) => outcome.line_items.push(item),
                Err(miss) => outcome.failed_lookups.push(miss),
            }
        }
    }

    outcome
}

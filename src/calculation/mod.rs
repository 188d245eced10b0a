//! Calculation logic for the Tour Pricing Engine.
//!
//! This module contains the calculation functions for resolving and
//! aggregating prices: occupancy multiplier resolution, period/template
//! matching, template-mode component pricing, raw-mode itinerary pricing,
//! per-day aggregation, total aggregation with markup, and the two
//! composed entry points.

mod day_totals;
mod engine;
mod itinerary_items;
mod occupancy;
mod period_match;
mod template_items;
mod totals;

pub use day_totals::{DayAggregation, aggregate_by_day};
pub use engine::{compute_itinerary_pricing, resolve_template_pricing};
pub use itinerary_items::{
    ItineraryPricingOutcome, RateLookup, price_itinerary, price_room_requirement,
    price_transport_requirement,
};
pub use occupancy::{DEFAULT_MULTIPLIER, OCCUPANCY_RULES, resolve_multiplier};
pub use period_match::{MatchCriteria, match_price_entry};
pub use template_items::{ComponentSelection, price_selected_components};
pub use totals::{apply_markup, build_pricing_result};

//! The engine's composed entry points.
//!
//! Each entry point is a pure function from its full input to a result or a
//! typed failure: nothing is cached across calls and no shared state is
//! touched, so any number of computations may run concurrently.

use rust_decimal::Decimal;

use crate::calculation::{
    ComponentSelection, MatchCriteria, RateLookup, aggregate_by_day, build_pricing_result,
    match_price_entry, price_itinerary, price_selected_components,
};
use crate::error::EngineResult;
use crate::models::{ItineraryDay, PriceCatalogEntry, PricingResult};

/// Resolves template-mode pricing: matches the unique applicable price list,
/// prices the selected components, and aggregates the result.
///
/// The caller supplies the catalog snapshot (typically every entry for the
/// requested template), the selection criteria, the chosen components with
/// quantities, and the optional markup percentage held by the UI.
///
/// # Errors
///
/// Propagates [`NoMatchingPeriod`](crate::error::EngineError::NoMatchingPeriod),
/// [`AmbiguousPeriod`](crate::error::EngineError::AmbiguousPeriod),
/// [`EmptySelection`](crate::error::EngineError::EmptySelection),
/// [`ComponentNotFound`](crate::error::EngineError::ComponentNotFound), and
/// [`InvalidMarkup`](crate::error::EngineError::InvalidMarkup). All of these
/// abort the whole computation; template mode has no partial results.
pub fn resolve_template_pricing(
    entries: &[PriceCatalogEntry],
    criteria: &MatchCriteria,
    selections: &[ComponentSelection],
    markup_percent: Option<Decimal>,
) -> EngineResult<PricingResult> {
    let entry = match_price_entry(entries, criteria)?;
    let line_items = price_selected_components(entry, selections)?;
    let aggregation = aggregate_by_day(line_items);
    build_pricing_result(aggregation, Vec::new(), markup_percent)
}

/// Computes raw-mode pricing across an itinerary.
///
/// Every room and transport requirement is priced through the rate
/// collaborator; lookups that find no rate abort only the affected
/// requirement and are surfaced on the result's `failed_lookups`, so a
/// partial, explicitly-marked-incomplete result is still returned.
///
/// # Errors
///
/// Only [`InvalidMarkup`](crate::error::EngineError::InvalidMarkup) aborts
/// the computation; rate misses never do.
pub fn compute_itinerary_pricing(
    days: &[ItineraryDay],
    rates: &dyn RateLookup,
    markup_percent: Option<Decimal>,
) -> EngineResult<PricingResult> {
    let outcome = price_itinerary(days, rates);
    let aggregation = aggregate_by_day(outcome.line_items);
    build_pricing_result(aggregation, outcome.failed_lookups, markup_percent)
}

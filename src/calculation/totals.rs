//! Total aggregation and markup application.
//!
//! Sums day summaries and template-level items into the final
//! [`PricingResult`], applying an optional markup percentage. All arithmetic
//! stays in exact Decimal; presentation rounding is the boundary's job
//! ([`PricingResult::round_to_cents`]).

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::DayAggregation;
use crate::error::{EngineError, EngineResult};
use crate::models::{AppliedMarkup, LineCategory, PricingResult, RateMiss};

/// Applies a markup percentage to a base total.
///
/// # Errors
///
/// [`EngineError::InvalidMarkup`] if the percentage is negative. A markup of
/// zero is valid and records an amount of zero.
pub fn apply_markup(base_total: Decimal, percent: Decimal) -> EngineResult<AppliedMarkup> {
    if percent < Decimal::ZERO {
        return Err(EngineError::InvalidMarkup { percent });
    }

    Ok(AppliedMarkup {
        percentage: percent,
        amount: base_total * percent / Decimal::from(100),
    })
}

/// Sums an aggregation into the final pricing result.
///
/// Accommodation and package items feed `accommodation_subtotal`, transport
/// items feed `transport_subtotal`, and `total_cost` is their sum plus any
/// markup. Omitting the markup leaves `total_cost` equal to the base total
/// and `applied_markup` empty.
pub fn build_pricing_result(
    aggregation: DayAggregation,
    failed_lookups: Vec<RateMiss>,
    markup_percent: Option<Decimal>,
) -> EngineResult<PricingResult> {
    let mut accommodation_subtotal = Decimal::ZERO;
    let mut transport_subtotal = Decimal::ZERO;

    let all_items = aggregation
        .days
        .iter()
        .flat_map(|day| day.line_items.iter())
        .chain(aggregation.undated_items.iter());

    for item in all_items {
        match item.category {
            LineCategory::Accommodation | LineCategory::Package => {
                accommodation_subtotal += item.total_price;
            }
            LineCategory::Transport => transport_subtotal += item.total_price,
        }
    }

    let base_total = accommodation_subtotal + transport_subtotal;

    let applied_markup = match markup_percent {
        Some(percent) => Some(apply_markup(base_total, percent)?),
        None => None,
    };

    let total_cost = base_total
        + applied_markup
            .as_ref()
            .map(|m| m.amount)
            .unwrap_or(Decimal::ZERO);

    Ok(PricingResult {
        computation_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        total_cost,
        accommodation_subtotal,
        transport_subtotal,
        day_breakdown: aggregation.days,
        package_items: aggregation.undated_items,
        applied_markup,
        failed_lookups,
    })
}

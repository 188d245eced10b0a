//! Per-day aggregation.
//!
//! Groups priced line items by itinerary day in ascending numeric order.
//! Items without a day number (template-mode pricing) are excluded from the
//! day grouping and surfaced separately. Ordering is stable and
//! deterministic so output is reproducible and fixtures diff cleanly.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{DaySummary, PricedLineItem};

/// The result of grouping line items by day.
#[derive(Debug, Clone, Default)]
pub struct DayAggregation {
    /// Per-day summaries in ascending day order.
    pub days: Vec<DaySummary>,
    /// Items with no day number, in input order.
    pub undated_items: Vec<PricedLineItem>,
}

/// Groups line items by `day_number` and sums each day's totals.
///
/// Within a day, items keep their input order; `day_total` is the exact
/// Decimal sum of the day's `total_price` values.
pub fn aggregate_by_day(line_items: Vec<PricedLineItem>) -> DayAggregation {
    let mut by_day: BTreeMap<u32, Vec<PricedLineItem>> = BTreeMap::new();
    let mut undated_items = Vec::new();

    for item in line_items {
        match item.day_number {
            Some(day_number) => by_day.entry(day_number).or_default().push(item),
            None => undated_items.push(item),
        }
    }

    let days = by_day
        .into_iter()
        .map(|(day_number, line_items)| {
            let day_total: Decimal = line_items.iter().map(|i| i.total_price).sum();
            DaySummary {
                day_number,
                line_items,
                day_total,
            }
        })
        .collect();

    DayAggregation {
        days,
        undated_items,
    }
}

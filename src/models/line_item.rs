//! Priced line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The cost bucket a line item is summed into.
///
/// `Package` marks template-mode items; they contribute to the
/// accommodation-role subtotal so both pricing modes produce the same
/// result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Nightly room pricing from raw-mode lookups.
    Accommodation,
    /// Vehicle pricing from raw-mode lookups.
    Transport,
    /// Template-mode component pricing, not day-scoped.
    Package,
}

/// One priced output line. Immutable once produced.
///
/// The invariant `total_price = unit_price * multiplier * quantity` is
/// established by [`PricedLineItem::priced`].
///
/// # Example
///
/// ```
/// use tour_pricing_engine::models::{LineCategory, PricedLineItem};
/// use rust_decimal::Decimal;
///
/// let item = PricedLineItem::priced(
///     None,
///     "Double Occupancy",
///     LineCategory::Package,
///     3,
///     Decimal::from(1000),
///     2,
/// );
/// assert_eq!(item.total_price, Decimal::from(6000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    /// The 1-based itinerary day, or `None` for template-level items.
    pub day_number: Option<u32>,
    /// Human-readable label for the line.
    pub label: String,
    /// The cost bucket this line is summed into.
    pub category: LineCategory,
    /// Number of rooms or vehicles priced.
    pub quantity: u32,
    /// Per-unit price before occupancy scaling.
    pub unit_price: Decimal,
    /// Occupancy multiplier applied to the unit price.
    pub multiplier: u32,
    /// `unit_price * multiplier * quantity`.
    pub total_price: Decimal,
}

impl PricedLineItem {
    /// Builds a line item, computing `total_price` from its factors.
    pub fn priced(
        day_number: Option<u32>,
        label: impl Into<String>,
        category: LineCategory,
        quantity: u32,
        unit_price: Decimal,
        multiplier: u32,
    ) -> Self {
        let total_price = unit_price * Decimal::from(multiplier) * Decimal::from(quantity);
        Self {
            day_number,
            label: label.into(),
            category,
            quantity,
            unit_price,
            multiplier,
            total_price,
        }
    }
}

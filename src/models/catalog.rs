//! Price catalog models.
//!
//! This module defines the [`PriceCatalogEntry`] and [`PriceComponent`] types
//! representing template-scoped price lists supplied by the catalog store.
//! The engine reads these records; it never mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced line within a price list.
///
/// `base_price` is a per-person amount; the occupancy multiplier derived
/// from `attribute_name` scales it to the room level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComponent {
    /// Unique identifier for the component within its entry.
    pub id: String,
    /// Free-text occupancy label (e.g., "Double Occupancy", "Per Person").
    pub attribute_name: String,
    /// Per-person base price. Never negative.
    pub base_price: Decimal,
    /// Optional human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A template-scoped price list valid for an inclusive date window.
///
/// Entries are created and edited by catalog management; within a single
/// computation they are a read-only snapshot.
///
/// # Example
///
/// ```
/// use tour_pricing_engine::models::{PriceCatalogEntry, PriceComponent};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = PriceCatalogEntry {
///     id: "pl_winter".to_string(),
///     template_id: "tpl_golden_triangle".to_string(),
///     valid_from: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
///     valid_to: NaiveDate::from_ymd_opt(2027, 2, 28).unwrap(),
///     meal_plan_id: "mp_half_board".to_string(),
///     room_count: 2,
///     components: vec![PriceComponent {
///         id: "cmp_double".to_string(),
///         attribute_name: "Double Occupancy".to_string(),
///         base_price: Decimal::from(1000),
///         description: None,
///     }],
/// };
///
/// let from = NaiveDate::from_ymd_opt(2026, 11, 20).unwrap();
/// let to = NaiveDate::from_ymd_opt(2026, 11, 27).unwrap();
/// assert!(entry.contains_range(from, to));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCatalogEntry {
    /// Unique identifier for the price list.
    pub id: String,
    /// The tour template this price list belongs to.
    pub template_id: String,
    /// First travel date the list is valid for (inclusive).
    pub valid_from: NaiveDate,
    /// Last travel date the list is valid for (inclusive).
    pub valid_to: NaiveDate,
    /// The meal plan this list prices for.
    pub meal_plan_id: String,
    /// The room-count bucket this list prices for.
    pub room_count: u32,
    /// The priced components of the list, in catalog order.
    pub components: Vec<PriceComponent>,
}

impl PriceCatalogEntry {
    /// Returns true if the entry's validity window fully contains the
    /// requested travel range. Containment is inclusive on both bounds;
    /// overlap alone does not qualify.
    pub fn contains_range(&self, date_from: NaiveDate, date_to: NaiveDate) -> bool {
        date_from >= self.valid_from && date_to <= self.valid_to
    }

    /// Looks up a component by id.
    pub fn component(&self, component_id: &str) -> Option<&PriceComponent> {
        self.components.iter().find(|c| c.id == component_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_entry() -> PriceCatalogEntry {
        PriceCatalogEntry {
            id: "pl_winter".to_string(),
            template_id: "tpl_golden_triangle".to_string(),
            valid_from: date("2026-11-01"),
            valid_to: date("2027-02-28"),
            meal_plan_id: "mp_half_board".to_string(),
            room_count: 2,
            components: vec![
                PriceComponent {
                    id: "cmp_double".to_string(),
                    attribute_name: "Double Occupancy".to_string(),
                    base_price: Decimal::from(1000),
                    description: Some("Per person sharing".to_string()),
                },
                PriceComponent {
                    id: "cmp_single_supp".to_string(),
                    attribute_name: "Single Room Supplement".to_string(),
                    base_price: Decimal::from(450),
                    description: None,
                },
            ],
        }
    }

    #[test]
    fn test_contains_range_fully_inside() {
        let entry = sample_entry();
        assert!(entry.contains_range(date("2026-12-01"), date("2026-12-10")));
    }

    #[test]
    fn test_contains_range_inclusive_bounds() {
        let entry = sample_entry();
        assert!(entry.contains_range(date("2026-11-01"), date("2027-02-28")));
    }

    #[test]
    fn test_contains_range_rejects_overlap() {
        let entry = sample_entry();
        // Starts before the window opens
        assert!(!entry.contains_range(date("2026-10-28"), date("2026-11-05")));
        // Ends after the window closes
        assert!(!entry.contains_range(date("2027-02-20"), date("2027-03-05")));
    }

    #[test]
    fn test_component_lookup() {
        let entry = sample_entry();
        let component = entry.component("cmp_single_supp").unwrap();
        assert_eq!(component.attribute_name, "Single Room Supplement");
        assert!(entry.component("cmp_missing").is_none());
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: PriceCatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_component_deserialization_defaults_description() {
        let json = r#"{
            "id": "cmp_quad",
            "attribute_name": "Quad Share",
            "base_price": "640"
        }"#;

        let component: PriceComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.base_price, Decimal::from(640));
        assert!(component.description.is_none());
    }
}

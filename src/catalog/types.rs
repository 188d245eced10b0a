//! Catalog file types.
//!
//! Strongly-typed structures deserialized from the YAML catalog files. The
//! engine treats rate rows as an opaque lookup; these types exist only at
//! the catalog-store boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::PriceCatalogEntry;

/// `price_lists.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct PriceListsFile {
    /// The template-scoped price lists.
    pub price_lists: Vec<PriceCatalogEntry>,
}

/// A nightly rate for a (room, occupancy, meal plan, date) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomRateRow {
    /// The room type this rate prices.
    pub room_type_id: String,
    /// The occupancy type this rate prices.
    pub occupancy_type_id: String,
    /// The meal plan this rate prices, if meal-plan specific.
    #[serde(default)]
    pub meal_plan_id: Option<String>,
    /// The night this rate applies to.
    pub date: NaiveDate,
    /// The nightly rate.
    pub nightly_rate: Decimal,
}

/// `room_rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RoomRatesFile {
    /// The nightly rate rows.
    pub room_rates: Vec<RoomRateRow>,
}

/// A per-unit rate for a (vehicle, date) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VehicleRateRow {
    /// The vehicle type this rate prices.
    pub vehicle_type_id: String,
    /// The day this rate applies to.
    pub date: NaiveDate,
    /// The per-unit rate.
    pub unit_rate: Decimal,
}

/// `vehicle_rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct VehicleRatesFile {
    /// The per-unit rate rows.
    pub vehicle_rates: Vec<VehicleRateRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_room_rate_row_deserialization() {
        let yaml = r#"
room_type_id: rt_deluxe
occupancy_type_id: occ_double
meal_plan_id: mp_breakfast
date: 2026-11-20
nightly_rate: "1500"
"#;

        let row: RoomRateRow = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(row.room_type_id, "rt_deluxe");
        assert_eq!(row.meal_plan_id.as_deref(), Some("mp_breakfast"));
        assert_eq!(row.nightly_rate, Decimal::from(1500));
    }

    #[test]
    fn test_room_rate_row_meal_plan_optional() {
        let yaml = r#"
room_type_id: rt_standard
occupancy_type_id: occ_triple
date: 2026-11-20
nightly_rate: "980.50"
"#;

        let row: RoomRateRow = serde_yaml::from_str(yaml).unwrap();
        assert!(row.meal_plan_id.is_none());
    }

    #[test]
    fn test_vehicle_rate_row_deserialization() {
        let yaml = r#"
vehicle_type_id: veh_suv
date: 2026-11-20
unit_rate: "800"
"#;

        let row: VehicleRateRow = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(row.vehicle_type_id, "veh_suv");
        assert_eq!(row.unit_rate, Decimal::from(800));
    }
}

//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a pricing
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::RateLookup;
use crate::error::{EngineError, EngineResult};
use crate::models::PriceCatalogEntry;

use super::types::{PriceListsFile, RoomRateRow, RoomRatesFile, VehicleRateRow, VehicleRatesFile};

/// Loads and provides read-only access to a pricing catalog.
///
/// The `CatalogLoader` reads YAML files from a directory and answers the two
/// queries the engine needs: "list price lists for a template" and the
/// per-tuple rate lookups of raw mode. Once loaded it is an immutable
/// snapshot; a computation can never observe a mid-flight catalog change.
///
/// # Directory Structure
///
/// ```text
/// catalog/sample/
/// ├── price_lists.yaml    # template-scoped price lists
/// ├── room_rates.yaml     # nightly rate rows
/// └── vehicle_rates.yaml  # per-unit vehicle rate rows
/// ```
///
/// # Example
///
/// ```no_run
/// use tour_pricing_engine::catalog::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./catalog/sample")?;
/// let entries = catalog.entries_for_template("tpl_golden_triangle");
/// # Ok::<(), tour_pricing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    price_lists: Vec<PriceCatalogEntry>,
    room_rates: Vec<RoomRateRow>,
    vehicle_rates: Vec<VehicleRateRow>,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::CatalogNotFound`] if a required file is missing.
    /// - [`EngineError::CatalogParseError`] if a file contains invalid YAML
    ///   or a record violates a catalog invariant (inverted validity
    ///   window, negative base price).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let price_lists_path = path.join("price_lists.yaml");
        let price_lists_file: PriceListsFile = Self::load_yaml(&price_lists_path)?;
        Self::validate_price_lists(&price_lists_path, &price_lists_file.price_lists)?;

        let room_rates_file: RoomRatesFile = Self::load_yaml(&path.join("room_rates.yaml"))?;
        let vehicle_rates_file: VehicleRatesFile =
            Self::load_yaml(&path.join("vehicle_rates.yaml"))?;

        Ok(Self {
            price_lists: price_lists_file.price_lists,
            room_rates: room_rates_file.room_rates,
            vehicle_rates: vehicle_rates_file.vehicle_rates,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects records that violate catalog invariants.
    fn validate_price_lists(path: &Path, entries: &[PriceCatalogEntry]) -> EngineResult<()> {
        for entry in entries {
            if entry.valid_from > entry.valid_to {
                return Err(EngineError::CatalogParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "price list '{}' has valid_from {} after valid_to {}",
                        entry.id, entry.valid_from, entry.valid_to
                    ),
                });
            }
            for component in &entry.components {
                if component.base_price < Decimal::ZERO {
                    return Err(EngineError::CatalogParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "component '{}' of price list '{}' has negative base price {}",
                            component.id, entry.id, component.base_price
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns a snapshot of every price list for a template.
    ///
    /// The entries are cloned so a computation holds its own copy,
    /// independent of any later catalog reload.
    pub fn entries_for_template(&self, template_id: &str) -> Vec<PriceCatalogEntry> {
        self.price_lists
            .iter()
            .filter(|e| e.template_id == template_id)
            .cloned()
            .collect()
    }

    /// Returns every loaded price list.
    pub fn price_lists(&self) -> &[PriceCatalogEntry] {
        &self.price_lists
    }
}

impl RateLookup for CatalogLoader {
    fn room_rate(
        &self,
        room_type_id: &str,
        occupancy_type_id: &str,
        meal_plan_id: Option<&str>,
        date: NaiveDate,
    ) -> Option<Decimal> {
        self.room_rates
            .iter()
            .find(|row| {
                row.room_type_id == room_type_id
                    && row.occupancy_type_id == occupancy_type_id
                    && row.meal_plan_id.as_deref() == meal_plan_id
                    && row.date == date
            })
            .map(|row| row.nightly_rate)
    }

    fn vehicle_rate(&self, vehicle_type_id: &str, date: NaiveDate) -> Option<Decimal> {
        self.vehicle_rates
            .iter()
            .find(|row| row.vehicle_type_id == vehicle_type_id && row.date == date)
            .map(|row| row.unit_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_catalog(dir_name: &str, price_lists: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("tour-pricing-engine-tests").join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("price_lists.yaml"), price_lists).unwrap();
        fs::write(dir.join("room_rates.yaml"), "room_rates: []\n").unwrap();
        fs::write(dir.join("vehicle_rates.yaml"), "vehicle_rates: []\n").unwrap();
        dir
    }

    const VALID_PRICE_LISTS: &str = r#"
price_lists:
  - id: pl_winter
    template_id: tpl_golden_triangle
    valid_from: 2026-11-01
    valid_to: 2027-02-28
    meal_plan_id: mp_half_board
    room_count: 2
    components:
      - id: cmp_double
        attribute_name: Double Occupancy
        base_price: "1000"
"#;

    #[test]
    fn test_load_valid_catalog() {
        let dir = write_catalog("valid", VALID_PRICE_LISTS);
        let catalog = CatalogLoader::load(&dir).unwrap();

        let entries = catalog.entries_for_template("tpl_golden_triangle");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].components[0].base_price, Decimal::from(1000));
        assert!(catalog.entries_for_template("tpl_unknown").is_empty());
    }

    #[test]
    fn test_missing_file_is_catalog_not_found() {
        let dir = std::env::temp_dir()
            .join("tour-pricing-engine-tests")
            .join("does-not-exist");

        let result = CatalogLoader::load(&dir);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CatalogNotFound { .. }
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = write_catalog("bad-yaml", "price_lists: [not: closed");

        let result = CatalogLoader::load(&dir);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CatalogParseError { .. }
        ));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let inverted = r#"
price_lists:
  - id: pl_backwards
    template_id: tpl_golden_triangle
    valid_from: 2027-02-28
    valid_to: 2026-11-01
    meal_plan_id: mp_half_board
    room_count: 2
    components: []
"#;
        let dir = write_catalog("inverted", inverted);

        match CatalogLoader::load(&dir).unwrap_err() {
            EngineError::CatalogParseError { message, .. } => {
                assert!(message.contains("pl_backwards"));
                assert!(message.contains("valid_from"));
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_base_price_is_rejected() {
        let negative = r#"
price_lists:
  - id: pl_winter
    template_id: tpl_golden_triangle
    valid_from: 2026-11-01
    valid_to: 2027-02-28
    meal_plan_id: mp_half_board
    room_count: 2
    components:
      - id: cmp_bad
        attribute_name: Double Occupancy
        base_price: "-10"
"#;
        let dir = write_catalog("negative-price", negative);

        match CatalogLoader::load(&dir).unwrap_err() {
            EngineError::CatalogParseError { message, .. } => {
                assert!(message.contains("cmp_bad"));
                assert!(message.contains("negative"));
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_lookup_matches_full_tuple() {
        let dir = std::env::temp_dir()
            .join("tour-pricing-engine-tests")
            .join("rates");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("price_lists.yaml"), "price_lists: []\n").unwrap();
        fs::write(
            dir.join("room_rates.yaml"),
            r#"
room_rates:
  - room_type_id: rt_deluxe
    occupancy_type_id: occ_double
    meal_plan_id: mp_breakfast
    date: 2026-11-20
    nightly_rate: "1500"
  - room_type_id: rt_deluxe
    occupancy_type_id: occ_double
    date: 2026-11-20
    nightly_rate: "1400"
"#,
        )
        .unwrap();
        fs::write(
            dir.join("vehicle_rates.yaml"),
            r#"
vehicle_rates:
  - vehicle_type_id: veh_suv
    date: 2026-11-20
    unit_rate: "800"
"#,
        )
        .unwrap();

        let catalog = CatalogLoader::load(&dir).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 11, 20).unwrap();

        assert_eq!(
            catalog.room_rate("rt_deluxe", "occ_double", Some("mp_breakfast"), date),
            Some(Decimal::from(1500))
        );
        assert_eq!(
            catalog.room_rate("rt_deluxe", "occ_double", None, date),
            Some(Decimal::from(1400))
        );
        assert_eq!(
            catalog.room_rate("rt_deluxe", "occ_single", None, date),
            None
        );
        assert_eq!(
            catalog.vehicle_rate("veh_suv", date),
            Some(Decimal::from(800))
        );
        assert_eq!(catalog.vehicle_rate("veh_coach", date), None);
    }
}

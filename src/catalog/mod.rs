//! Catalog loading and lookup for the Tour Pricing Engine.
//!
//! This module provides the read-only catalog snapshot the engine computes
//! against: template-scoped price lists plus room and vehicle rate rows,
//! loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use tour_pricing_engine::catalog::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./catalog/sample").unwrap();
//! let entries = catalog.entries_for_template("tpl_golden_triangle");
//! println!("{} price lists", entries.len());
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{RoomRateRow, VehicleRateRow};

//! Core data models for the Tour Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod catalog;
mod itinerary;
mod line_item;
mod pricing_result;

pub use catalog::{PriceCatalogEntry, PriceComponent};
pub use itinerary::{ItineraryDay, RoomRequirement, TransportRequirement};
pub use line_item::{LineCategory, PricedLineItem};
pub use pricing_result::{AppliedMarkup, DaySummary, PricingResult, RateMiss};

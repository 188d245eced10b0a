//! HTTP API module for the Tour Pricing Engine.
//!
//! This module provides the REST endpoints the back office calls to price
//! a tour: template-mode resolution and raw-mode itinerary pricing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ItineraryPricingRequest, TemplatePricingRequest};
pub use response::ApiError;
pub use state::AppState;

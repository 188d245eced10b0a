//! Itinerary request models.
//!
//! This module defines the per-call request types for raw-mode pricing:
//! itinerary days and their room and transport requirements. These are
//! supplied by the caller per computation and are not retained.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A request-side accommodation need for one itinerary day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRequirement {
    /// The room type to price.
    pub room_type_id: String,
    /// The occupancy type to price (e.g., "occ_double").
    pub occupancy_type_id: String,
    /// The meal plan to price, if the rate is meal-plan specific.
    #[serde(default)]
    pub meal_plan_id: Option<String>,
    /// Number of rooms required. At least 1.
    pub quantity: u32,
    /// The 1-based itinerary day this requirement belongs to.
    pub day_number: u32,
}

/// A request-side transport need for one itinerary day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRequirement {
    /// The vehicle type to price.
    pub vehicle_type_id: String,
    /// Number of vehicles required. At least 1.
    pub quantity: u32,
    /// The 1-based itinerary day this requirement belongs to.
    pub day_number: u32,
}

/// One day of an itinerary with its accommodation and transport needs.
///
/// `nights` is the number of nightly rates the day's stay covers; a day with
/// `nights = 2` prices the room rate on `date` and the following night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// The 1-based day number within the itinerary.
    pub day_number: u32,
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Number of nights the day's stay covers.
    pub nights: u32,
    /// Room requirements for this day.
    pub rooms: Vec<RoomRequirement>,
    /// Transport requirements for this day.
    pub transport: Vec<TransportRequirement>,
}

impl ItineraryDay {
    /// Iterates the calendar dates of every night this day's stay covers,
    /// starting at `date`.
    pub fn night_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.nights).map(|offset| self.date + Duration::days(i64::from(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_night_dates_single_night() {
        let day = ItineraryDay {
            day_number: 1,
            date: date("2026-11-20"),
            nights: 1,
            rooms: vec![],
            transport: vec![],
        };

        let nights: Vec<NaiveDate> = day.night_dates().collect();
        assert_eq!(nights, vec![date("2026-11-20")]);
    }

    #[test]
    fn test_night_dates_multi_night_spans_month_end() {
        let day = ItineraryDay {
            day_number: 3,
            date: date("2026-11-29"),
            nights: 3,
            rooms: vec![],
            transport: vec![],
        };

        let nights: Vec<NaiveDate> = day.night_dates().collect();
        assert_eq!(
            nights,
            vec![date("2026-11-29"), date("2026-11-30"), date("2026-12-01")]
        );
    }

    #[test]
    fn test_night_dates_zero_nights_is_empty() {
        let day = ItineraryDay {
            day_number: 1,
            date: date("2026-11-20"),
            nights: 0,
            rooms: vec![],
            transport: vec![],
        };

        assert_eq!(day.night_dates().count(), 0);
    }

    #[test]
    fn test_room_requirement_deserialization() {
        let json = r#"{
            "room_type_id": "rt_deluxe",
            "occupancy_type_id": "occ_double",
            "meal_plan_id": "mp_breakfast",
            "quantity": 2,
            "day_number": 1
        }"#;

        let requirement: RoomRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(requirement.room_type_id, "rt_deluxe");
        assert_eq!(requirement.meal_plan_id.as_deref(), Some("mp_breakfast"));
        assert_eq!(requirement.quantity, 2);
    }

    #[test]
    fn test_room_requirement_meal_plan_defaults_to_none() {
        let json = r#"{
            "room_type_id": "rt_standard",
            "occupancy_type_id": "occ_triple",
            "quantity": 1,
            "day_number": 2
        }"#;

        let requirement: RoomRequirement = serde_json::from_str(json).unwrap();
        assert!(requirement.meal_plan_id.is_none());
    }

    #[test]
    fn test_itinerary_day_serialization_round_trip() {
        let day = ItineraryDay {
            day_number: 1,
            date: date("2026-11-20"),
            nights: 1,
            rooms: vec![RoomRequirement {
                room_type_id: "rt_deluxe".to_string(),
                occupancy_type_id: "occ_double".to_string(),
                meal_plan_id: None,
                quantity: 2,
                day_number: 1,
            }],
            transport: vec![TransportRequirement {
                vehicle_type_id: "veh_suv".to_string(),
                quantity: 1,
                day_number: 1,
            }],
        };

        let json = serde_json::to_string(&day).unwrap();
        let deserialized: ItineraryDay = serde_json::from_str(&json).unwrap();
        assert_eq!(day, deserialized);
    }
}

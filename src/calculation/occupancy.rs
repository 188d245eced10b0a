//! Occupancy multiplier resolution.
//!
//! Catalog components carry free-text occupancy labels ("Double Occupancy",
//! "Per Person"); the multiplier derived from the label scales a per-person
//! base price to the room level. The rule table is isolated behind a single
//! function so it can later be replaced by a structured occupancy enum
//! without touching the rest of the engine.

/// The ordered keyword rules. First match in this order wins.
pub const OCCUPANCY_RULES: [(&str, u32); 4] =
    [("single", 1), ("double", 2), ("triple", 3), ("quad", 4)];

/// Multiplier for labels matching no rule: per-person pricing, no
/// occupancy scaling.
pub const DEFAULT_MULTIPLIER: u32 = 1;

/// Resolves the occupancy multiplier for a component label.
///
/// Case-insensitive substring match against [`OCCUPANCY_RULES`]. This is a
/// total function: every label resolves to a multiplier, so free-text
/// catalog labels can never block pricing.
///
/// # Examples
///
/// ```
/// use tour_pricing_engine::calculation::resolve_multiplier;
///
/// assert_eq!(resolve_multiplier("Double Occupancy"), 2);
/// assert_eq!(resolve_multiplier("TRIPLE share"), 3);
/// assert_eq!(resolve_multiplier("Per Person"), 1);
/// ```
pub fn resolve_multiplier(label: &str) -> u32 {
    let label = label.to_lowercase();
    for (keyword, multiplier) in OCCUPANCY_RULES {
        if label.contains(keyword) {
            return multiplier;
        }
    }
    DEFAULT_MULTIPLIER
}

//! Period/template matching.
//!
//! Selects the single catalog entry applicable to a travel window and
//! criteria set. The predicate requires full containment of the requested
//! range, not mere overlap, and uniqueness is enforced: more than one match
//! is a data-quality problem surfaced to the caller, never silently
//! resolved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PriceCatalogEntry;

/// The criteria a catalog entry must satisfy to price a request.
///
/// The matching function is pure and referentially transparent, so callers
/// may memoize per criteria tuple if they wish; the engine itself caches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriteria {
    /// The tour template being priced.
    pub template_id: String,
    /// First travel date (inclusive).
    pub date_from: NaiveDate,
    /// Last travel date (inclusive).
    pub date_to: NaiveDate,
    /// The requested meal plan.
    pub meal_plan_id: String,
    /// The requested room-count bucket.
    pub room_count: u32,
}

impl MatchCriteria {
    /// Returns true if the entry satisfies every criterion: same template,
    /// meal plan, and room count, and a validity window that fully contains
    /// the requested range.
    pub fn matches(&self, entry: &PriceCatalogEntry) -> bool {
        entry.template_id == self.template_id
            && entry.meal_plan_id == self.meal_plan_id
            && entry.room_count == self.room_count
            && entry.contains_range(self.date_from, self.date_to)
    }
}

/// Selects the unique catalog entry satisfying the criteria.
///
/// # Errors
///
/// - [`EngineError::NoMatchingPeriod`] if no entry qualifies.
/// - [`EngineError::AmbiguousPeriod`] if two or more entries qualify,
///   carrying every conflicting entry id.
pub fn match_price_entry<'a>(
    entries: &'a [PriceCatalogEntry],
    criteria: &MatchCriteria,
) -> EngineResult<&'a PriceCatalogEntry> {
    let matched: Vec<&PriceCatalogEntry> =
        entries.iter().filter(|e| criteria.matches(e)).collect();

    match matched.as_slice() {
        [] => Err(EngineError::NoMatchingPeriod {
            template_id: criteria.template_id.clone(),
            date_from: criteria.date_from,
            date_to: criteria.date_to,
        }),
        [entry] => Ok(*entry),
        conflicting => Err(EngineError::AmbiguousPeriod {
            entry_ids: conflicting.iter().map(|e| e.id.clone()).collect(),
        }),
    }
}

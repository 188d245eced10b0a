//! Template-mode line item calculation.
//!
//! Expands a matched price list into priced line items from the caller's
//! component selection. Template pricing is not day-scoped, so every line
//! item carries `day_number = None` and the `Package` category.

use serde::{Deserialize, Serialize};

use crate::calculation::resolve_multiplier;
use crate::error::{EngineError, EngineResult};
use crate::models::{LineCategory, PriceCatalogEntry, PricedLineItem};

/// A caller-selected component with its room quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSelection {
    /// The id of the component to price.
    pub component_id: String,
    /// Number of rooms this component is priced for.
    pub quantity: u32,
}

/// Prices the selected components of a matched price list.
///
/// For each selection the occupancy multiplier is resolved from the
/// component's label and the line total is
/// `base_price * multiplier * quantity`.
///
/// # Errors
///
/// - [`EngineError::EmptySelection`] if no components were selected.
/// - [`EngineError::ComponentNotFound`] if a selection references an id the
///   entry does not carry.
pub fn price_selected_components(
    entry: &PriceCatalogEntry,
    selections: &[ComponentSelection],
) -> EngineResult<Vec<PricedLineItem>> {
    if selections.is_empty() {
        return Err(EngineError::EmptySelection);
    }

    selections
        .iter()
        .map(|selection| {
            let component = entry.component(&selection.component_id).ok_or_else(|| {
                EngineError::ComponentNotFound {
                    entry_id: entry.id.clone(),
                    component_id: selection.component_id.clone(),
                }
            })?;

            let multiplier = resolve_multiplier(&component.attribute_name);
            Ok(PricedLineItem::priced(
                None,
                component.attribute_name.clone(),
                LineCategory::Package,
                selection.quantity,
                component.base_price,
                multiplier,
            ))
        })
        .collect()
}

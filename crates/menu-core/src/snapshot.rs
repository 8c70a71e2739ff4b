//! Serializable session state

use menu_pricing::PriceAndCalories;
use menu_select::{ComboSelection, Modification, SelectedModifiers};
use serde::{Deserialize, Serialize};

/// Point-in-time export of a session, for persistence or transport
///
/// The engine never reads snapshots back; consumers own the shape's
/// interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Current selection tree (the driving product's own groups)
    pub selected_ingredients: SelectedModifiers,
    /// Combo slot state, present only for combo sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo_selection: Option<ComboSelection>,
    /// Total price and calories at snapshot time
    pub price_result: PriceAndCalories,
    /// Whether the session drives a combo product
    pub is_combo: bool,
    /// Changes against the initial selection
    pub modifications: Vec<Modification>,
}

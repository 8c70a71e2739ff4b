//! Modification summaries
//!
//! Compares a session's current selection tree against its initial tree and
//! produces the human-readable change list. Recipe groups (a dish's expected
//! default composition) suppress ordinary add/remove noise: removing a
//! recipe item is a customization worth reporting, its untouched siblings
//! are not.

use crate::tree::SelectedModifiers;
use menu_catalog::{CatalogSource, EntityRef, Product};
use serde::{Deserialize, Serialize};

/// Kind of selection change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModificationKind {
    /// Item newly selected
    Add,
    /// Item deselected
    Remove,
    /// Intensity choice changed on a still-selected item
    Change,
}

/// One reported change between the initial and current trees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    /// What changed
    pub kind: ModificationKind,
    /// Group the item belongs to
    pub group_ref: EntityRef,
    /// The item itself
    pub item_ref: EntityRef,
    /// Display name of the item (falls back to the reference id)
    pub name: String,
    /// Current quantity of the item
    pub quantity: u32,
}

/// Compare `current` against `initial`, group by group
///
/// Groups reachable from the product's `ingredient_refs` are recipe groups:
/// they report `Remove` when a recipe item's quantity drops from >0 to 0,
/// `Add` only for items absent from the initial tree appearing with quantity
/// >0, and always `Change` when `sub_item_id` differs on a still-selected
/// item. Non-recipe groups report plain `Add` (0 → >0), `Remove` (>0 → 0)
/// and `Change`, nothing else.
#[must_use]
pub fn modifications<C: CatalogSource>(
    catalog: &C,
    product: &Product,
    current: &SelectedModifiers,
    initial: &SelectedModifiers,
) -> Vec<Modification> {
    let mut out = Vec::new();

    for (group_ref, group) in current.iter() {
        let recipe = product.ingredient_refs.contains_key(group_ref);

        for (item_ref, item) in group.iter() {
            let name = catalog
                .resolve(item_ref)
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| item_ref.id().to_string());
            let init = initial.item(group_ref, item_ref);

            let kind = match init {
                None => item.is_selected().then_some(ModificationKind::Add),
                Some(init_item) => {
                    let was = init_item.quantity;
                    if was > 0 && item.quantity == 0 {
                        Some(ModificationKind::Remove)
                    } else if !recipe && was == 0 && item.quantity > 0 {
                        Some(ModificationKind::Add)
                    } else if item.is_selected() && item.sub_item_id != init_item.sub_item_id {
                        Some(ModificationKind::Change)
                    } else {
                        None
                    }
                }
            };

            if let Some(kind) = kind {
                out.push(Modification {
                    kind,
                    group_ref: group_ref.clone(),
                    item_ref: item_ref.clone(),
                    name,
                    quantity: item.quantity,
                });
            }
        }
    }
    out
}

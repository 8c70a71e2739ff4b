//! Combo selection model
//!
//! A combo product exposes one slot per referenced product group; each slot
//! holds one chosen product and that product's own nested selection tree.

use crate::builder::SelectionBuilder;
use crate::error::SelectionError;
use crate::ops;
use crate::tree::SelectedModifiers;
use indexmap::IndexMap;
use menu_catalog::{
    effective_is_default, effective_price, CatalogSource, Entity, EntityRef, Product,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selectable option inside a combo slot
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOption {
    /// Reference of the option's product
    pub item_ref: EntityRef,
    /// Display name
    pub name: String,
    /// Effective price (virtual products resolved through their variants)
    pub price: Decimal,
    /// Whether this option is the slot's default (edge override first)
    pub is_default: bool,
}

/// One independent slot of a combo
#[derive(Debug, Clone, PartialEq)]
pub struct ComboSlot {
    /// Reference of the slot's product group
    pub group_ref: EntityRef,
    /// Display name of the slot
    pub name: String,
    /// Options in menu order
    pub options: Vec<ComboOption>,
}

/// The chosen product of one slot, with its nested selection tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboSlotSelection {
    /// Currently chosen product
    pub product_ref: EntityRef,
    /// The chosen product's own selection tree
    pub selection: SelectedModifiers,
}

/// Full combo selection state: one entry per slot group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboSelection(IndexMap<EntityRef, ComboSlotSelection>);

impl ComboSelection {
    /// Empty combo selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot entry, if present
    #[inline]
    #[must_use]
    pub fn slot(&self, group_ref: &EntityRef) -> Option<&ComboSlotSelection> {
        self.0.get(group_ref)
    }

    /// Mutable slot entry, if present
    #[inline]
    pub fn slot_mut(&mut self, group_ref: &EntityRef) -> Option<&mut ComboSlotSelection> {
        self.0.get_mut(group_ref)
    }

    /// Insert or replace a slot
    #[inline]
    pub fn insert(&mut self, group_ref: EntityRef, slot: ComboSlotSelection) {
        self.0.insert(group_ref, slot);
    }

    /// Iterate slots in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&EntityRef, &ComboSlotSelection)> {
        self.0.iter()
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the combo has no slots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Product-group references of a combo, in menu order: its slots
pub fn slot_refs(combo: &Product) -> impl Iterator<Item = &EntityRef> {
    combo
        .ingredient_refs
        .keys()
        .chain(combo.modifier_group_refs.keys())
        .filter(|r| r.is_product_group())
}

/// The slots a combo product offers, with priced options
#[must_use]
pub fn combo_options<C: CatalogSource>(catalog: &C, combo: &Product) -> Vec<ComboSlot> {
    slot_refs(combo)
        .filter_map(|group_ref| {
            let group = match catalog.resolve(group_ref) {
                Some(Entity::ProductGroup(g)) => g,
                _ => return None,
            };
            let options = group
                .child_refs
                .iter()
                .filter_map(|(item_ref, ov)| {
                    let entity = catalog.resolve(item_ref)?;
                    let product = entity.as_product()?;
                    Some(ComboOption {
                        item_ref: item_ref.clone(),
                        name: product.name.clone(),
                        price: ov
                            .price
                            .unwrap_or_else(|| effective_price(catalog, product, None)),
                        is_default: effective_is_default(&entity, Some(ov)),
                    })
                })
                .collect();
            Some(ComboSlot {
                group_ref: group_ref.clone(),
                name: group.name.clone(),
                options,
            })
        })
        .collect()
}

/// Build the initial combo selection: each slot on its default option
///
/// Per slot, the default-flagged option wins, else the first option; the
/// chosen product gets its own initial selection tree. Slots whose group or
/// options cannot be resolved are skipped.
///
/// # Errors
/// [`SelectionError::DepthExceeded`] from building a slot product's tree.
pub fn build_initial_combo<C: CatalogSource>(
    catalog: &C,
    combo: &Product,
) -> Result<ComboSelection, SelectionError> {
    let builder = SelectionBuilder::new(catalog);
    let mut selection = ComboSelection::new();

    for slot in combo_options(catalog, combo) {
        let chosen = slot
            .options
            .iter()
            .find(|o| o.is_default)
            .or_else(|| slot.options.first());
        let Some(chosen) = chosen else {
            continue;
        };
        let Some(product) = catalog.resolve(&chosen.item_ref).and_then(|e| e.as_product()) else {
            continue;
        };
        selection.insert(
            slot.group_ref,
            ComboSlotSelection {
                product_ref: chosen.item_ref.clone(),
                selection: builder.build_initial(product)?,
            },
        );
    }
    Ok(selection)
}

/// Swap one slot to a different product, rebuilding its nested tree
///
/// An unresolvable product reference leaves the selection unchanged.
///
/// # Errors
/// [`SelectionError::DepthExceeded`] from building the new product's tree.
pub fn change_combo_product<C: CatalogSource>(
    catalog: &C,
    selection: &mut ComboSelection,
    slot_ref: &EntityRef,
    product_ref: &EntityRef,
) -> Result<(), SelectionError> {
    let Some(product) = catalog.resolve(product_ref).and_then(|e| e.as_product()) else {
        return Ok(());
    };
    let tree = SelectionBuilder::new(catalog).build_initial(product)?;
    selection.insert(
        slot_ref.clone(),
        ComboSlotSelection {
            product_ref: product_ref.clone(),
            selection: tree,
        },
    );
    Ok(())
}

/// Toggle a modifier inside one slot's nested selection tree
pub fn toggle_combo_modifier<C: CatalogSource>(
    catalog: &C,
    selection: &mut ComboSelection,
    slot_ref: &EntityRef,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
    initial: &SelectedModifiers,
) {
    if let Some(slot) = selection.slot_mut(slot_ref) {
        ops::toggle(catalog, &mut slot.selection, group_ref, item_ref, initial);
    }
}

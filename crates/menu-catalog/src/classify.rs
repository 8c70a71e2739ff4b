//! Interaction-mode classification
//!
//! Determines how an item inside a group is presented and toggled, and
//! resolves the intensity sub-group of intensity-capable items.

use crate::catalog::CatalogSource;
use crate::entity::{Entity, Modifier, ModifierGroup, Product};
use crate::fallback::{effective_is_default, effective_quantity_rule};
use crate::refs::EntityRef;

/// Interaction mode of an item within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Nested dropdown: the item is itself a product-group reference
    Accordion,
    /// Quantity is pinned (`min == max`); not user-toggleable
    Static,
    /// Member of a swap group (`min = max = 1`); exactly one stays chosen
    Radio,
    /// Free checkbox, subject only to capacity rules
    Checkbox,
}

/// Classify how `item_ref` behaves inside the group named by `group_ref`
///
/// Unresolvable groups or items degrade to [`ActionKind::Checkbox`] rather
/// than failing; the state machine's own guards keep such items inert.
#[must_use]
pub fn action_kind<C: CatalogSource>(
    catalog: &C,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
) -> ActionKind {
    if item_ref.is_product_group() {
        return ActionKind::Accordion;
    }

    let Some(group) = catalog.resolve(group_ref).and_then(|e| e.as_group()) else {
        return ActionKind::Checkbox;
    };
    let ov = group.child_refs.get(item_ref);

    if let Some(entity) = catalog.resolve(item_ref) {
        if effective_quantity_rule(&entity, ov).is_fixed() {
            return ActionKind::Static;
        }
    }

    if group.is_swap() {
        ActionKind::Radio
    } else {
        ActionKind::Checkbox
    }
}

/// The item's own intensity sub-group: its first referenced modifier group
///
/// `sub_item_id` on a selection entry always names a member of this group.
#[must_use]
pub fn intensity_group<'a, C: CatalogSource>(
    catalog: &'a C,
    product: &'a Product,
) -> Option<(&'a EntityRef, &'a ModifierGroup)> {
    if !Entity::Product(product).has_intensities() {
        return None;
    }
    let (group_ref, _) = product.modifier_group_refs.first()?;
    match catalog.resolve(group_ref)? {
        Entity::ModifierGroup(group) => Some((group_ref, group)),
        _ => None,
    }
}

/// First default-flagged member of an intensity group (edge override first)
#[must_use]
pub fn default_intensity<'a, C: CatalogSource>(
    catalog: &'a C,
    group: &'a ModifierGroup,
) -> Option<(&'a EntityRef, &'a Modifier)> {
    group.child_refs.iter().find_map(|(child_ref, ov)| {
        let modifier = catalog.resolve(child_ref)?.as_modifier()?;
        effective_is_default(&Entity::Modifier(modifier), Some(ov))
            .then_some((child_ref, modifier))
    })
}

/// First exclusive ("None") member of an intensity group
#[must_use]
pub fn exclusive_intensity<'a, C: CatalogSource>(
    catalog: &'a C,
    group: &'a ModifierGroup,
) -> Option<(&'a EntityRef, &'a Modifier)> {
    group.child_refs.keys().find_map(|child_ref| {
        let modifier = catalog.resolve(child_ref)?.as_modifier()?;
        modifier.is_exclusive.then_some((child_ref, modifier))
    })
}

/// Member of an intensity group by bare modifier id
#[must_use]
pub fn intensity_member<'a, C: CatalogSource>(
    catalog: &'a C,
    group: &'a ModifierGroup,
    sub_item_id: &str,
) -> Option<(&'a EntityRef, &'a Modifier)> {
    group.child_refs.keys().find_map(|child_ref| {
        if child_ref.id() != sub_item_id {
            return None;
        }
        let modifier = catalog.resolve(child_ref)?.as_modifier()?;
        Some((child_ref, modifier))
    })
}

//! Selection state machine
//!
//! Pure operations over a selection tree: toggle, increase, decrease and
//! intensity change, plus completeness checks. Every operation is total:
//! unresolvable references make the operation a no-op rather than an error.
//! Operations mutate the tree in place; callers clone first when they need a
//! proposed tree they might discard.

use crate::tree::{SelectedGroup, SelectedModifiers};
use menu_catalog::{
    action_kind, default_intensity, effective_item_max, exclusive_intensity, find_size_variant,
    intensity_group, intensity_member, ActionKind, CatalogSource, EntityRef, Product,
};

/// Toggle an item on or off
///
/// Honors, in order: the group capacity guard, exclusive ("None") selection
/// clearing the whole group, radio no-op on re-select, radio zero-then-select,
/// and the checkbox path clearing a previously selected exclusive sibling.
/// Deselected entries get their nested selection restored from `initial`,
/// discarding in-progress nested edits. Intensity-capable items cycle their
/// `sub_item_id` between the default and the exclusive option.
pub fn toggle<C: CatalogSource>(
    catalog: &C,
    tree: &mut SelectedModifiers,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
    initial: &SelectedModifiers,
) {
    let Some(view) = catalog.resolve(group_ref).and_then(|e| e.as_group()) else {
        return;
    };
    let radio = action_kind(catalog, group_ref, item_ref) == ActionKind::Radio;
    let current = tree.item(group_ref, item_ref).cloned().unwrap_or_default();
    let selected = current.is_selected();

    // Capacity guard: a full group accepts no new plain selection.
    if !selected && !radio {
        if let Some(max) = view.max() {
            let total = tree
                .group(group_ref)
                .map(SelectedGroup::total_quantity)
                .unwrap_or(0);
            if total >= max {
                return;
            }
        }
    }

    let exclusive = catalog
        .resolve(item_ref)
        .map(|e| e.is_exclusive())
        .unwrap_or(false);

    // Selecting an exclusive item clears every sibling.
    if exclusive && !selected && !radio {
        let group = tree.group_entry(group_ref);
        for (sib_ref, sib) in group.iter_mut() {
            if sib_ref == item_ref {
                continue;
            }
            sib.quantity = 0;
            sib.selection = initial
                .item(group_ref, sib_ref)
                .and_then(|i| i.selection.clone());
        }
        group.entry(item_ref).quantity = 1;
        return;
    }

    if radio && selected {
        return;
    }

    if radio {
        // Swap semantics: clear the group before selecting the target.
        let group = tree.group_entry(group_ref);
        for (sib_ref, sib) in group.iter_mut() {
            sib.quantity = 0;
            sib.selection = initial
                .item(group_ref, sib_ref)
                .and_then(|i| i.selection.clone());
        }
    } else if let Some(group) = tree.group_mut(group_ref) {
        // Checkbox path: selecting a normal item clears a prior "None".
        for (sib_ref, sib) in group.iter_mut() {
            if sib_ref != item_ref
                && sib.is_selected()
                && catalog
                    .resolve(sib_ref)
                    .map(|e| e.is_exclusive())
                    .unwrap_or(false)
            {
                sib.quantity = 0;
            }
        }
    }

    let new_quantity = if !selected || radio { 1 } else { 0 };
    let new_selection = if new_quantity > 0 {
        current.selection.clone()
    } else {
        initial
            .item(group_ref, item_ref)
            .and_then(|i| i.selection.clone())
    };

    let new_sub_item_id = match catalog
        .resolve(item_ref)
        .filter(|e| e.has_intensities())
        .and_then(|e| e.as_product())
    {
        Some(product) => next_intensity(catalog, product, current.sub_item_id.as_deref()),
        None => current.sub_item_id.clone(),
    };

    let item = tree.group_entry(group_ref).entry(item_ref);
    item.quantity = new_quantity;
    item.selection = new_selection;
    item.sub_item_id = new_sub_item_id;
}

/// Next intensity choice for a bare toggle
///
/// No previous choice → default option; previous was the exclusive option →
/// default; otherwise → exclusive option (falling back to default). Bare
/// toggles therefore cycle default ↔ none.
fn next_intensity<C: CatalogSource>(
    catalog: &C,
    product: &Product,
    previous: Option<&str>,
) -> Option<String> {
    let (_, group) = intensity_group(catalog, product)?;
    let default = default_intensity(catalog, group).map(|(r, _)| r.id().to_string());
    let exclusive = exclusive_intensity(catalog, group).map(|(r, _)| r.id().to_string());

    match previous {
        None => default,
        Some(prev) if Some(prev) == exclusive.as_deref() => default,
        Some(_) => exclusive.or(default),
    }
}

/// Increase an item's quantity by one, clamped by capacity
///
/// The new quantity never exceeds
/// `min(group_max, item_max, group_max − group_total + current)`.
pub fn increase<C: CatalogSource>(
    catalog: &C,
    tree: &mut SelectedModifiers,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
) {
    let Some(view) = catalog.resolve(group_ref).and_then(|e| e.as_group()) else {
        return;
    };
    let Some(group) = tree.group_mut(group_ref) else {
        return;
    };

    let total = group.total_quantity();
    let current = group.get(item_ref).map(|i| i.quantity).unwrap_or(0);
    let item_max = catalog
        .resolve(item_ref)
        .map(|e| effective_item_max(&e, view.child_refs.get(item_ref)))
        .unwrap_or(1);

    let cap = match view.max() {
        Some(group_max) => item_max
            .min(group_max)
            .min(group_max.saturating_sub(total).saturating_add(current)),
        None => item_max,
    };

    let item = group.entry(item_ref);
    item.quantity = item.quantity.saturating_add(1).min(cap);
}

/// Decrease an item's quantity by one, flooring at zero
///
/// Leaves `sub_item_id` untouched: quantity zero with a stale intensity id
/// is a defined state.
pub fn decrease(tree: &mut SelectedModifiers, group_ref: &EntityRef, item_ref: &EntityRef) {
    if let Some(item) = tree.item_mut(group_ref, item_ref) {
        item.quantity = item.quantity.saturating_sub(1);
    }
}

/// Set the intensity (or explicit size) choice on an item
///
/// `sub_item_id` must name a member of the item's own intensity group, or,
/// for virtual items, one of its size variants. Unknown ids, and items with
/// neither relationship, leave the tree unchanged.
pub fn change_intensity<C: CatalogSource>(
    catalog: &C,
    tree: &mut SelectedModifiers,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
    sub_item_id: &str,
) {
    let Some(product) = catalog.resolve(item_ref).and_then(|e| e.as_product()) else {
        return;
    };

    let known = match intensity_group(catalog, product) {
        Some((_, group)) => intensity_member(catalog, group, sub_item_id).is_some(),
        None => {
            product.is_virtual && find_size_variant(catalog, product, sub_item_id).is_some()
        }
    };
    if !known {
        return;
    }

    if let Some(item) = tree.item_mut(group_ref, item_ref) {
        item.sub_item_id = Some(sub_item_id.to_string());
    }
}

/// Groups whose summed quantity is below their configured minimum
///
/// An unset minimum counts as zero, i.e. always satisfied.
#[must_use]
pub fn unsatisfied_groups<C: CatalogSource>(
    catalog: &C,
    tree: &SelectedModifiers,
) -> Vec<EntityRef> {
    tree.iter()
        .filter_map(|(group_ref, group)| {
            let min = catalog
                .resolve(group_ref)
                .and_then(|e| e.as_group())
                .map(|view| view.min())
                .unwrap_or(0);
            (group.total_quantity() < min).then(|| group_ref.clone())
        })
        .collect()
}

/// Whether every group meets its configured minimum
#[inline]
#[must_use]
pub fn is_complete<C: CatalogSource>(catalog: &C, tree: &SelectedModifiers) -> bool {
    unsatisfied_groups(catalog, tree).is_empty()
}

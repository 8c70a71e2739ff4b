//! Aggregate pricing over a selection tree
//!
//! Walks every group and item of a tree, adding scaled deltas for chosen
//! upgrades, subtracting the unscaled delta of deselected defaults (to
//! restore accounting lost by removing a free-by-default component), and
//! recursing into nested composition scaled by the parent quantity.

use crate::delta::{item_delta, PriceAndCalories};
use menu_catalog::{
    default_intensity, default_size_variant, effective_is_default, intensity_group,
    CatalogSource, Entity,
};
use menu_select::{SelectedModifiers, DEFAULT_MAX_DEPTH};
use rust_decimal::{Decimal, RoundingStrategy};

/// Aggregate price and calorie delta of a whole selection tree
#[must_use]
pub fn aggregate<C: CatalogSource>(catalog: &C, tree: &SelectedModifiers) -> PriceAndCalories {
    walk(catalog, tree, 0)
}

fn walk<C: CatalogSource>(
    catalog: &C,
    tree: &SelectedModifiers,
    depth: usize,
) -> PriceAndCalories {
    // Trees are built under the same guard, so this bound is never hit for
    // trees the builder produced; it keeps the walk total regardless.
    if depth >= DEFAULT_MAX_DEPTH {
        return PriceAndCalories::ZERO;
    }

    let mut total = PriceAndCalories::ZERO;

    for (group_ref, group) in tree.iter() {
        let view = catalog.resolve(group_ref).and_then(|e| e.as_group());

        for (item_ref, item) in group.iter() {
            if let Some(entity) = catalog.resolve(item_ref) {
                let ov = view.as_ref().and_then(|v| v.child_refs.get(item_ref));
                let is_default = effective_is_default(&entity, ov);
                let changed = sub_item_changed(catalog, &entity, item.sub_item_id.as_deref());

                if item.quantity > 0 && (!is_default || changed) {
                    let delta =
                        item_delta(catalog, group_ref, item_ref, item.sub_item_id.as_deref());
                    total += delta.scaled(item.quantity);
                } else if is_default && item.quantity == 0 {
                    let delta =
                        item_delta(catalog, group_ref, item_ref, item.sub_item_id.as_deref());
                    total -= delta;
                }
            }

            if let Some(selection) = &item.selection {
                total += walk(catalog, selection, depth + 1).scaled(item.quantity);
            }
        }
    }
    total
}

/// Whether the item's `sub_item_id` departs from its neutral choice
///
/// Neutral is the default intensity for intensity-capable items and the
/// default size variant for virtual items; everything else has no sub-item
/// notion and never counts as changed.
fn sub_item_changed<C: CatalogSource>(
    catalog: &C,
    entity: &Entity<'_>,
    sub_item_id: Option<&str>,
) -> bool {
    let Some(sub) = sub_item_id else {
        return false;
    };

    if entity.has_intensities() {
        if let Some((_, igroup)) = entity
            .as_product()
            .and_then(|p| intensity_group(catalog, p))
        {
            return default_intensity(catalog, igroup)
                .map(|(r, _)| r.id() != sub)
                .unwrap_or(true);
        }
    }

    if entity.is_virtual() {
        if let Some(product) = entity.as_product() {
            return default_size_variant(catalog, product)
                .map(|v| v.item_ref.id() != sub)
                .unwrap_or(true);
        }
    }

    false
}

/// Final charged price: base plus aggregate, rounded to cents
///
/// Midpoints round away from zero.
#[must_use]
pub fn full_price(base: Decimal, aggregate: &PriceAndCalories) -> Decimal {
    (base + aggregate.price).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

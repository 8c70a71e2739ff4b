//! Combo pricing
//!
//! A combo is priced as its own base price plus one contribution per slot:
//! the slot product's nested aggregate plus a slot-level swap upcharge.
//! Slots whose group flags more than one co-equal default suppress the
//! upcharge entirely rather than guess a baseline and double-charge.

use crate::aggregate::aggregate;
use crate::delta::PriceAndCalories;
use menu_catalog::{effective_price, CatalogSource, EntityRef, Product};
use menu_select::{combo_options, ComboSelection, ComboSlot};
use rust_decimal::{Decimal, RoundingStrategy};

/// Swap upcharge of one slot's chosen product over the slot baseline
///
/// Baseline is the single default option, or the first option when none is
/// flagged. More than one default makes the baseline ambiguous and the
/// upcharge zero. Choosing the baseline itself also costs nothing.
#[must_use]
pub fn slot_upcharge(slot: &ComboSlot, product_ref: &EntityRef) -> Decimal {
    let mut defaults = slot.options.iter().filter(|o| o.is_default);
    let baseline = match (defaults.next(), defaults.next()) {
        (Some(_), Some(_)) => return Decimal::ZERO,
        (Some(default), None) => Some(default),
        (None, _) => slot.options.first(),
    };
    let Some(baseline) = baseline else {
        return Decimal::ZERO;
    };
    let Some(selected) = slot.options.iter().find(|o| &o.item_ref == product_ref) else {
        return Decimal::ZERO;
    };
    (selected.price - baseline.price).max(Decimal::ZERO)
}

/// Aggregate price and calorie contribution of a whole combo selection
///
/// Per slot: the chosen product's own calories, its nested selection
/// aggregate, and the slot upcharge. Slots absent from the combo's current
/// option set contribute only their nested aggregate.
#[must_use]
pub fn combo_aggregate<C: CatalogSource>(
    catalog: &C,
    combo: &Product,
    selection: &ComboSelection,
) -> PriceAndCalories {
    let slots = combo_options(catalog, combo);
    let mut total = PriceAndCalories::ZERO;

    for (group_ref, slot_sel) in selection.iter() {
        if let Some(slot) = slots.iter().find(|s| &s.group_ref == group_ref) {
            total += PriceAndCalories::new(slot_upcharge(slot, &slot_sel.product_ref), 0);
        }
        if let Some(entity) = catalog.resolve(&slot_sel.product_ref) {
            total += PriceAndCalories::new(Decimal::ZERO, entity.calories());
        }
        total += aggregate(catalog, &slot_sel.selection);
    }
    total
}

/// Final charged price of a combo, rounded to cents
#[must_use]
pub fn combo_full_price<C: CatalogSource>(
    catalog: &C,
    combo: &Product,
    selection: &ComboSelection,
) -> Decimal {
    let base = effective_price(catalog, combo, None);
    (base + combo_aggregate(catalog, combo, selection).price)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

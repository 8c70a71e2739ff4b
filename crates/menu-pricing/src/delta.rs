//! Per-item price and calorie deltas
//!
//! [`item_delta`] implements the four upcharge cases, distinguished by
//! whether the item is its group's designated default, whether it carries
//! an intensity sub-group, and whether it is virtual:
//!
//! 1. default, no intensity, not virtual: free; calories are the item's own
//! 2. default, virtual, explicit size chosen: the size upcharge
//! 3. default, with intensity: delta of chosen intensity over the default
//! 4. non-default, no intensity: swap delta against the group default, or
//!    the item's own effective price outside swap groups
//! 5. non-default, with intensity: the chosen intensity's price, no delta

use menu_catalog::{
    default_intensity, effective_edge_price, effective_is_default, effective_price,
    find_size_variant, intensity_group, intensity_member, size_upcharge, variant_calories,
    CatalogSource, ChildOverride, Entity, EntityRef, Modifier, ModifierGroup,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, SubAssign};

/// A price/calorie pair; the additive unit of the pricing engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAndCalories {
    /// Price delta
    pub price: Decimal,
    /// Calorie delta
    pub calories: i64,
}

impl PriceAndCalories {
    /// The additive identity
    pub const ZERO: Self = Self {
        price: Decimal::ZERO,
        calories: 0,
    };

    /// Pair from parts
    #[inline]
    #[must_use]
    pub fn new(price: Decimal, calories: i64) -> Self {
        Self { price, calories }
    }

    /// Both components scaled by a quantity
    #[inline]
    #[must_use]
    pub fn scaled(self, quantity: u32) -> Self {
        Self {
            price: self.price * Decimal::from(quantity),
            calories: self.calories * i64::from(quantity),
        }
    }
}

impl Add for PriceAndCalories {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            price: self.price + rhs.price,
            calories: self.calories + rhs.calories,
        }
    }
}

impl AddAssign for PriceAndCalories {
    fn add_assign(&mut self, rhs: Self) {
        self.price += rhs.price;
        self.calories += rhs.calories;
    }
}

impl SubAssign for PriceAndCalories {
    fn sub_assign(&mut self, rhs: Self) {
        self.price -= rhs.price;
        self.calories -= rhs.calories;
    }
}

/// Resolved price of an item on a group edge
///
/// Edge-override price first; products otherwise resolve virtual-aware,
/// everything else prices as itself. Explicit sizes reprice only default
/// entries (case 2): a non-default virtual item always resolves at its
/// default variant, whatever `sub_item_id` carries.
pub(crate) fn resolved_item_price<C: CatalogSource>(
    catalog: &C,
    entity: &Entity<'_>,
    ov: Option<&ChildOverride>,
) -> Decimal {
    if let Some(price) = ov.and_then(|o| o.price) {
        return price;
    }
    match entity.as_product() {
        Some(product) => effective_price(catalog, product, None),
        None => entity.price(),
    }
}

/// Price of one intensity member on its in-group edge
fn intensity_price(group: &ModifierGroup, member_ref: &EntityRef, member: &Modifier) -> Decimal {
    effective_edge_price(&Entity::Modifier(member), group.child_refs.get(member_ref))
}

/// Price and calorie delta of one item at quantity one
///
/// Unresolvable group or item references contribute nothing.
#[must_use]
pub fn item_delta<C: CatalogSource>(
    catalog: &C,
    group_ref: &EntityRef,
    item_ref: &EntityRef,
    sub_item_id: Option<&str>,
) -> PriceAndCalories {
    let Some(view) = catalog.resolve(group_ref).and_then(|e| e.as_group()) else {
        return PriceAndCalories::ZERO;
    };
    let ov = view.child_refs.get(item_ref);
    let Some(entity) = catalog.resolve(item_ref) else {
        return PriceAndCalories::ZERO;
    };
    let is_default = effective_is_default(&entity, ov);

    // Intensity-capable items: cases 3 and 5.
    if entity.has_intensities() {
        if let Some(product) = entity.as_product() {
            if let Some((_, igroup)) = intensity_group(catalog, product) {
                return intensity_delta(catalog, igroup, &entity, is_default, sub_item_id);
            }
        }
    }

    if is_default {
        // Case 2: a default virtual item with an explicit size chosen.
        if entity.is_virtual() {
            if let Some(product) = entity.as_product() {
                if let Some(variant) =
                    sub_item_id.and_then(|id| find_size_variant(catalog, product, id))
                {
                    return PriceAndCalories::new(
                        size_upcharge(catalog, product, &variant.item_ref),
                        entity.calories() + variant_calories(catalog, &variant),
                    );
                }
            }
        }
        // Case 1: the designated default costs nothing.
        return PriceAndCalories::new(Decimal::ZERO, entity.calories());
    }

    // Case 4: non-default without an intensity sub-group.
    let selected_price = resolved_item_price(catalog, &entity, ov);
    let price = if view.is_swap() {
        let default_price = view.child_refs.iter().find_map(|(child_ref, child_ov)| {
            let child = catalog.resolve(child_ref)?;
            effective_is_default(&child, Some(child_ov))
                .then(|| resolved_item_price(catalog, &child, Some(child_ov)))
        });
        match default_price {
            Some(default_price) => (selected_price - default_price).max(Decimal::ZERO),
            None => selected_price,
        }
    } else {
        selected_price
    };

    PriceAndCalories::new(price, entity.calories())
}

/// Cases 3 and 5: the item's delta is carried by its chosen intensity
fn intensity_delta<C: CatalogSource>(
    catalog: &C,
    igroup: &ModifierGroup,
    entity: &Entity<'_>,
    is_default: bool,
    sub_item_id: Option<&str>,
) -> PriceAndCalories {
    let default = default_intensity(catalog, igroup);
    let selected = sub_item_id
        .and_then(|id| intensity_member(catalog, igroup, id))
        .or(default);

    let Some((selected_ref, selected_mod)) = selected else {
        return PriceAndCalories::ZERO;
    };
    let selected_price = intensity_price(igroup, selected_ref, selected_mod);

    let price = if is_default {
        let default_price = default
            .map(|(r, m)| intensity_price(igroup, r, m))
            .unwrap_or(Decimal::ZERO);
        (selected_price - default_price).max(Decimal::ZERO)
    } else {
        selected_price
    };

    let calories = if selected_mod.is_exclusive {
        0
    } else {
        entity.calories() + selected_mod.calories
    };

    PriceAndCalories::new(price, calories)
}

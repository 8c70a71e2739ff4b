//! Testing utilities for the menu-kit workspace
//!
//! Shared fixture catalogs exercised across the selection, pricing and
//! session tests.

#![allow(missing_docs)]

use menu_catalog::{
    Catalog, ChildOverride, EntityRef, Modifier, ModifierGroup, Product, ProductGroup,
    QuantityRule,
};
use rust_decimal::Decimal;

/// Dollars-and-cents shorthand
#[must_use]
pub fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn max_only(max: u32) -> QuantityRule {
    QuantityRule {
        max: Some(max),
        ..QuantityRule::default()
    }
}

/// The workhorse fixture: a burger meal with every rule the engine knows
///
/// - `burger`: virtual, sized Small $4.00 / Medium $5.00 (default) /
///   Large $6.00
/// - `burger-meal` $7.00: recipe base (pickles, onion, tomato), toppings
///   capped at 3 (free lettuce default), a mayo item with an intensity
///   scale (none/regular/extra), a sides swap group (fries default, salad
///   $3.79) and an ambiguous-default drinks swap group
/// - `burger-combo` $8.00: a sides slot with two co-equal defaults and a
///   drinks slot with a single default
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn burger_catalog() -> Catalog {
    Catalog::new()
        // Virtual burger and its size variants
        .with_product(Product::new("burger", "Burger", Decimal::ZERO).virtual_product())
        .with_product(Product::new("burger-sm", "Small Burger", usd(400)).with_calories(500))
        .with_product(
            Product::new("burger-md", "Medium Burger", usd(500))
                .with_default(true)
                .with_calories(700),
        )
        .with_product(Product::new("burger-lg", "Large Burger", usd(600)).with_calories(900))
        .with_product_group(
            ProductGroup::new("burger-sizes", "Burger Sizes")
                .with_child(EntityRef::product("burger-sm"), ChildOverride::none())
                .with_child(EntityRef::product("burger-md"), ChildOverride::none())
                .with_child(EntityRef::product("burger-lg"), ChildOverride::none()),
        )
        .with_size_groups("burger", vec![EntityRef::product_group("burger-sizes")])
        // Recipe base ingredients
        .with_modifier(Modifier::new("pickles", "Pickles", Decimal::ZERO).with_default(true).with_calories(10))
        .with_modifier(Modifier::new("onion", "Onion", Decimal::ZERO).with_default(true).with_calories(15))
        .with_modifier(Modifier::new("tomato", "Tomato", Decimal::ZERO).with_calories(5))
        .with_modifier_group(
            ModifierGroup::new("burger-base", "Burger Base")
                .with_child(EntityRef::modifier("pickles"), ChildOverride::none())
                .with_child(EntityRef::modifier("onion"), ChildOverride::none())
                .with_child(EntityRef::modifier("tomato"), ChildOverride::none()),
        )
        // Toppings, capped at three
        .with_modifier(
            Modifier::new("lettuce", "Lettuce", Decimal::ZERO)
                .with_default(true)
                .with_calories(5)
                .with_quantity(max_only(3)),
        )
        .with_modifier(Modifier::new("cheese", "Cheese", usd(75)).with_calories(90))
        .with_modifier(Modifier::new("bacon", "Bacon", usd(125)).with_calories(120))
        .with_modifier_group(
            ModifierGroup::new("toppings", "Toppings")
                .with_selection_quantity(max_only(3))
                .with_child(EntityRef::modifier("lettuce"), ChildOverride::none())
                .with_child(EntityRef::modifier("cheese"), ChildOverride::none())
                .with_child(EntityRef::modifier("bacon"), ChildOverride::none()),
        )
        // Mayo with an intensity scale
        .with_modifier(Modifier::new("no-mayo", "No Mayo", Decimal::ZERO).exclusive())
        .with_modifier(
            Modifier::new("regular-mayo", "Regular Mayo", Decimal::ZERO)
                .with_default(true)
                .with_calories(40),
        )
        .with_modifier(Modifier::new("extra-mayo", "Extra Mayo", usd(50)).with_calories(80))
        .with_modifier_group(
            ModifierGroup::new("mayo-amounts", "Mayo Amount")
                .with_selection_quantity(QuantityRule::exactly_one())
                .with_child(EntityRef::modifier("no-mayo"), ChildOverride::none())
                .with_child(EntityRef::modifier("regular-mayo"), ChildOverride::none())
                .with_child(EntityRef::modifier("extra-mayo"), ChildOverride::none()),
        )
        .with_product(
            Product::new("mayo", "Mayo", Decimal::ZERO)
                .with_calories(40)
                .with_modifier_group(
                    EntityRef::modifier_group("mayo-amounts"),
                    ChildOverride::none(),
                ),
        )
        .with_modifier_group(
            ModifierGroup::new("sauces", "Sauces").with_child(
                EntityRef::product("mayo"),
                ChildOverride::default_flag(true),
            ),
        )
        // Sides swap group: fries default, salad carries an upcharge
        .with_product(Product::new("fries", "Fries", usd(229)).with_calories(320))
        .with_product(Product::new("salad", "Side Salad", usd(379)).with_calories(150))
        .with_modifier_group(
            ModifierGroup::new("sides", "Sides")
                .with_selection_quantity(QuantityRule::exactly_one())
                .with_child(EntityRef::product("fries"), ChildOverride::default_flag(true))
                .with_child(EntityRef::product("salad"), ChildOverride::none()),
        )
        // Ambiguous-default drinks swap group
        .with_product(Product::new("cola", "Cola", usd(100)).with_default(true).with_calories(140))
        .with_product(Product::new("juice", "Juice", usd(200)).with_default(true).with_calories(180))
        .with_modifier_group(
            ModifierGroup::new("drinks", "Drinks")
                .with_selection_quantity(QuantityRule::exactly_one())
                .with_child(EntityRef::product("cola"), ChildOverride::none())
                .with_child(EntityRef::product("juice"), ChildOverride::none()),
        )
        // The virtual burger as a swap-group entrée
        .with_modifier_group(
            ModifierGroup::new("entree", "Entrée").with_child(
                EntityRef::product("burger"),
                ChildOverride::default_flag(true),
            ),
        )
        // The meal product under test
        .with_product(
            Product::new("burger-meal", "Burger Meal", usd(700))
                .recipe()
                .with_calories(0)
                .with_ingredient_group(
                    EntityRef::modifier_group("burger-base"),
                    ChildOverride::none(),
                )
                .with_modifier_group(EntityRef::modifier_group("entree"), ChildOverride::none())
                .with_modifier_group(EntityRef::modifier_group("toppings"), ChildOverride::none())
                .with_modifier_group(EntityRef::modifier_group("sauces"), ChildOverride::none())
                .with_modifier_group(EntityRef::modifier_group("sides"), ChildOverride::none())
                .with_modifier_group(EntityRef::modifier_group("drinks"), ChildOverride::none()),
        )
        // Combo: ambiguous sides slot, single-default drinks slot
        .with_product(Product::new("shake", "Shake", usd(250)).with_calories(400))
        .with_product_group(
            ProductGroup::new("combo-sides", "Combo Side")
                .with_child(EntityRef::product("fries"), ChildOverride::default_flag(true))
                .with_child(EntityRef::product("salad"), ChildOverride::default_flag(true)),
        )
        .with_product_group(
            ProductGroup::new("combo-drinks", "Combo Drink")
                .with_child(EntityRef::product("cola"), ChildOverride::default_flag(true))
                .with_child(EntityRef::product("shake"), ChildOverride::default_flag(false)),
        )
        .with_product(
            Product::new("burger-combo", "Burger Combo", usd(800))
                .combo()
                .with_modifier_group(
                    EntityRef::product_group("combo-sides"),
                    ChildOverride::none(),
                )
                .with_modifier_group(
                    EntityRef::product_group("combo-drinks"),
                    ChildOverride::none(),
                ),
        )
}

/// A snack box exercising nested composition and accordion groups
///
/// - `loaded-fries` $3.50: composed of its own base group (cheese sauce
///   default, jalapenos $0.50), orderable up to two at a time inside the
///   `snack-extras` group
/// - `snack-sauces`: holds the nested `dips` product group (ranch is the
///   default dip)
#[must_use]
pub fn snack_catalog() -> Catalog {
    Catalog::new()
        .with_modifier(
            Modifier::new("cheese-sauce", "Cheese Sauce", Decimal::ZERO)
                .with_default(true)
                .with_calories(100),
        )
        .with_modifier(Modifier::new("jalapenos", "Jalapenos", usd(50)).with_calories(20))
        .with_modifier_group(
            ModifierGroup::new("loaded-base", "Loaded Fries Base")
                .with_child(EntityRef::modifier("cheese-sauce"), ChildOverride::none())
                .with_child(EntityRef::modifier("jalapenos"), ChildOverride::none()),
        )
        .with_product(
            Product::new("loaded-fries", "Loaded Fries", usd(350))
                .with_calories(450)
                .with_quantity(max_only(2))
                .with_ingredient_group(
                    EntityRef::modifier_group("loaded-base"),
                    ChildOverride::none(),
                ),
        )
        .with_modifier_group(
            ModifierGroup::new("snack-extras", "Extras")
                .with_selection_quantity(max_only(4))
                .with_child(EntityRef::product("loaded-fries"), ChildOverride::none()),
        )
        .with_product(Product::new("ketchup", "Ketchup", Decimal::ZERO).with_calories(20))
        .with_product(Product::new("ranch", "Ranch", Decimal::ZERO).with_calories(70))
        .with_product_group(
            ProductGroup::new("dips", "Dips")
                .with_child(EntityRef::product("ketchup"), ChildOverride::none())
                .with_child(EntityRef::product("ranch"), ChildOverride::default_flag(true)),
        )
        .with_modifier_group(
            ModifierGroup::new("snack-sauces", "Sauces")
                .with_child(EntityRef::product_group("dips"), ChildOverride::none()),
        )
        .with_product(
            Product::new("snack-box", "Snack Box", usd(500))
                .with_modifier_group(
                    EntityRef::modifier_group("snack-extras"),
                    ChildOverride::none(),
                )
                .with_modifier_group(
                    EntityRef::modifier_group("snack-sauces"),
                    ChildOverride::none(),
                ),
        )
}

/// A catalog whose nesting loops back on itself
///
/// `loop-dish` composes an ingredient group whose only child is `loop-dish`
/// again; building its selection tree must hit the depth guard.
#[must_use]
pub fn cyclic_catalog() -> Catalog {
    Catalog::new()
        .with_product(
            Product::new("loop-dish", "Loop Dish", usd(100)).with_ingredient_group(
                EntityRef::modifier_group("loop-group"),
                ChildOverride::none(),
            ),
        )
        .with_modifier_group(
            ModifierGroup::new("loop-group", "Loop Group").with_child(
                EntityRef::product("loop-dish"),
                ChildOverride::default_flag(true),
            ),
        )
}

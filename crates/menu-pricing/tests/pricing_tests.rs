use menu_catalog::EntityRef;
use menu_pricing::{aggregate, full_price, PriceAndCalories};
use menu_select::{change_intensity, decrease, increase, toggle, SelectionBuilder};
use menu_test_utils::{burger_catalog, snack_catalog, usd};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn setup() -> (
    menu_catalog::Catalog,
    menu_select::SelectedModifiers,
    menu_select::SelectedModifiers,
) {
    let catalog = burger_catalog();
    let meal = catalog.product("burger-meal").unwrap();
    let initial = SelectionBuilder::new(&catalog).build_initial(meal).unwrap();
    let current = initial.clone();
    (catalog, initial, current)
}

#[test]
fn test_untouched_defaults_cost_nothing() {
    let (catalog, _initial, tree) = setup();
    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, Decimal::ZERO);
    assert_eq!(full_price(usd(700), &agg), usd(700));
}

#[test]
fn test_swap_to_a_pricier_side_charges_the_delta() {
    let (catalog, initial, mut tree) = setup();
    let sides = EntityRef::modifier_group("sides");
    toggle(&catalog, &mut tree, &sides, &EntityRef::product("salad"), &initial);

    let agg = aggregate(&catalog, &tree);
    // salad 3.79 over fries 2.29; the deselected default subtracts only
    // its calories, its price delta is zero by definition.
    assert_eq!(agg.price, usd(150));
    assert_eq!(agg.calories, 150 - 320);
    assert_eq!(full_price(usd(700), &agg), usd(850));
}

#[test]
fn test_ambiguous_default_swap_charges_nothing() {
    let (catalog, initial, mut tree) = setup();
    let drinks = EntityRef::modifier_group("drinks");
    toggle(&catalog, &mut tree, &drinks, &EntityRef::product("juice"), &initial);

    // juice is itself flagged default, so the swap carries no upcharge.
    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, Decimal::ZERO);
}

#[test]
fn test_explicit_size_choice_charges_the_upcharge() {
    let (catalog, _initial, mut tree) = setup();
    let entree = EntityRef::modifier_group("entree");
    let burger = EntityRef::product("burger");
    change_intensity(&catalog, &mut tree, &entree, &burger, "burger-lg");

    let agg = aggregate(&catalog, &tree);
    // Large 6.00 over the Medium default 5.00.
    assert_eq!(agg.price, usd(100));
    assert_eq!(full_price(usd(700), &agg), usd(800));
}

#[test]
fn test_intensity_upgrade_charges_the_member_delta() {
    let (catalog, _initial, mut tree) = setup();
    let sauces = EntityRef::modifier_group("sauces");
    let mayo = EntityRef::product("mayo");
    change_intensity(&catalog, &mut tree, &sauces, &mayo, "extra-mayo");

    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, usd(50));
    assert_eq!(agg.calories, 40 + 80);
}

#[test]
fn test_removed_default_subtracts_its_delta() {
    let (catalog, initial, mut tree) = setup();
    let base = EntityRef::modifier_group("burger-base");
    toggle(&catalog, &mut tree, &base, &EntityRef::modifier("pickles"), &initial);

    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, Decimal::ZERO);
    assert_eq!(agg.calories, -10);
}

#[test]
fn test_added_extras_sum_and_respect_item_caps() {
    let (catalog, initial, mut tree) = setup();
    let toppings = EntityRef::modifier_group("toppings");
    let bacon = EntityRef::modifier("bacon");

    // Drop lettuce first so the group has room for two bacon.
    decrease(&mut tree, &toppings, &EntityRef::modifier("lettuce"));
    toggle(&catalog, &mut tree, &toppings, &bacon, &initial);
    increase(&catalog, &mut tree, &toppings, &bacon);

    // bacon's implicit item max of 1 holds even with group capacity left.
    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, usd(125));

    toggle(&catalog, &mut tree, &toppings, &EntityRef::modifier("cheese"), &initial);
    let agg = aggregate(&catalog, &tree);
    assert_eq!(agg.price, usd(125) + usd(75));
}

#[test]
fn test_nested_composition_scales_by_the_parent_quantity() {
    let catalog = snack_catalog();
    let snack = catalog.product("snack-box").unwrap();
    let initial = SelectionBuilder::new(&catalog).build_initial(snack).unwrap();
    let mut tree = initial.clone();

    let extras = EntityRef::modifier_group("snack-extras");
    let fries = EntityRef::product("loaded-fries");
    toggle(&catalog, &mut tree, &extras, &fries, &initial);
    increase(&catalog, &mut tree, &extras, &fries);

    let base = EntityRef::modifier_group("loaded-base");
    let nested_initial = initial
        .item(&extras, &fries)
        .unwrap()
        .selection
        .clone()
        .unwrap();
    let nested = tree
        .item_mut(&extras, &fries)
        .unwrap()
        .selection
        .as_mut()
        .unwrap();
    toggle(&catalog, nested, &base, &EntityRef::modifier("jalapenos"), &nested_initial);

    let agg = aggregate(&catalog, &tree);
    // two loaded fries at 3.50 each, jalapenos 0.50 added to each
    assert_eq!(agg.price, usd(800));
    assert_eq!(agg.calories, 2 * 450 + 2 * 20);
}

#[test]
fn test_full_price_rounds_midpoints_away_from_zero() {
    let agg = PriceAndCalories::new(Decimal::new(5, 3), 0); // 0.005
    assert_eq!(full_price(usd(700), &agg), usd(701));

    let agg = PriceAndCalories::new(Decimal::new(-5, 3), 0); // 6.995 total
    assert_eq!(full_price(usd(700), &agg), usd(700));
}

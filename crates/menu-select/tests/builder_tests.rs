use menu_catalog::EntityRef;
use menu_select::{SelectionBuilder, SelectionError, DEFAULT_MAX_DEPTH};
use menu_test_utils::{burger_catalog, cyclic_catalog, snack_catalog};
use pretty_assertions::assert_eq;

#[test]
fn test_initial_tree_covers_all_groups_in_order() {
    let catalog = burger_catalog();
    let meal = catalog.product("burger-meal").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(meal).unwrap();

    let groups: Vec<_> = tree.iter().map(|(r, _)| r.id().to_string()).collect();
    // Ingredient groups first, then modifier groups, each in catalog order.
    assert_eq!(
        groups,
        vec!["burger-base", "entree", "toppings", "sauces", "sides", "drinks"]
    );
}

#[test]
fn test_defaults_are_granted_their_quantities() {
    let catalog = burger_catalog();
    let meal = catalog.product("burger-meal").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(meal).unwrap();

    let base = EntityRef::modifier_group("burger-base");
    assert_eq!(tree.item(&base, &EntityRef::modifier("pickles")).unwrap().quantity, 1);
    assert_eq!(tree.item(&base, &EntityRef::modifier("onion")).unwrap().quantity, 1);
    assert_eq!(tree.item(&base, &EntityRef::modifier("tomato")).unwrap().quantity, 0);

    let toppings = EntityRef::modifier_group("toppings");
    assert_eq!(tree.item(&toppings, &EntityRef::modifier("lettuce")).unwrap().quantity, 1);
    assert_eq!(tree.item(&toppings, &EntityRef::modifier("cheese")).unwrap().quantity, 0);
}

#[test]
fn test_swap_group_grants_a_single_default() {
    let catalog = burger_catalog();
    let meal = catalog.product("burger-meal").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(meal).unwrap();

    let sides = EntityRef::modifier_group("sides");
    assert_eq!(tree.item(&sides, &EntityRef::product("fries")).unwrap().quantity, 1);
    assert_eq!(tree.item(&sides, &EntityRef::product("salad")).unwrap().quantity, 0);

    // Two co-equal defaults: the first one wins, the second stays off.
    let drinks = EntityRef::modifier_group("drinks");
    assert_eq!(tree.item(&drinks, &EntityRef::product("cola")).unwrap().quantity, 1);
    assert_eq!(tree.item(&drinks, &EntityRef::product("juice")).unwrap().quantity, 0);
}

#[test]
fn test_intensity_items_start_on_their_default() {
    let catalog = burger_catalog();
    let meal = catalog.product("burger-meal").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(meal).unwrap();

    let mayo = tree
        .item(&EntityRef::modifier_group("sauces"), &EntityRef::product("mayo"))
        .unwrap();
    assert_eq!(mayo.quantity, 1);
    assert_eq!(mayo.sub_item_id.as_deref(), Some("regular-mayo"));
}

#[test]
fn test_composed_child_gets_a_nested_selection() {
    let catalog = snack_catalog();
    let snack = catalog.product("snack-box").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(snack).unwrap();

    let extras = EntityRef::modifier_group("snack-extras");
    let fries = tree.item(&extras, &EntityRef::product("loaded-fries")).unwrap();
    assert_eq!(fries.quantity, 0);

    // The composed child carries its own tree, populated with its defaults.
    let base = EntityRef::modifier_group("loaded-base");
    let nested = fries.selection.as_ref().unwrap();
    assert_eq!(nested.item(&base, &EntityRef::modifier("cheese-sauce")).unwrap().quantity, 1);
    assert_eq!(nested.item(&base, &EntityRef::modifier("jalapenos")).unwrap().quantity, 0);
}

#[test]
fn test_accordion_child_selects_the_default_member() {
    let catalog = snack_catalog();
    let snack = catalog.product("snack-box").unwrap();
    let tree = SelectionBuilder::new(&catalog).build_initial(snack).unwrap();

    // The entry is the chosen member of the nested group, not the group.
    let sauces = EntityRef::modifier_group("snack-sauces");
    let ranch = tree.item(&sauces, &EntityRef::product("ranch")).unwrap();
    assert_eq!(ranch.quantity, 1);
    assert_eq!(ranch.group_id.as_deref(), Some("dips"));
    assert!(tree.item(&sauces, &EntityRef::product("ketchup")).is_none());
    assert!(tree.item(&sauces, &EntityRef::product_group("dips")).is_none());
}

#[test]
fn test_cyclic_catalog_hits_the_depth_guard() {
    let catalog = cyclic_catalog();
    let dish = catalog.product("loop-dish").unwrap();
    let err = SelectionBuilder::new(&catalog).build_initial(dish).unwrap_err();
    assert!(matches!(
        err,
        SelectionError::DepthExceeded { limit } if limit == DEFAULT_MAX_DEPTH
    ));
}

#[test]
fn test_custom_depth_limit() {
    let catalog = cyclic_catalog();
    let dish = catalog.product("loop-dish").unwrap();
    let err = SelectionBuilder::new(&catalog)
        .with_max_depth(3)
        .build_initial(dish)
        .unwrap_err();
    assert!(matches!(err, SelectionError::DepthExceeded { limit: 3 }));
}

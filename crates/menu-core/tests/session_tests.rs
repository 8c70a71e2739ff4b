use menu_catalog::EntityRef;
use menu_core::{ComboSession, CustomizeSession, SessionError, SessionSnapshot};
use menu_select::ModificationKind;
use menu_test_utils::{burger_catalog, usd};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn meal_session() -> CustomizeSession<menu_catalog::Catalog> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("menu_core=debug")
        .with_test_writer()
        .try_init();
    CustomizeSession::open(Arc::new(burger_catalog()), &EntityRef::product("burger-meal"))
        .unwrap()
}

#[test]
fn test_open_rejects_unknown_products() {
    let err = CustomizeSession::open(Arc::new(burger_catalog()), &EntityRef::product("tofu"))
        .unwrap_err();
    assert!(matches!(err, SessionError::UnknownProduct(_)));
}

#[test]
fn test_fresh_session_prices_at_base() {
    let session = meal_session();
    assert_eq!(session.full_price(), usd(700));
    assert!(session.modifications().is_empty());
    assert!(session.is_complete());
}

#[test]
fn test_side_swap_changes_price_and_reports_both_ends() {
    let mut session = meal_session();
    let sides = EntityRef::modifier_group("sides");
    session.toggle(&sides, &EntityRef::product("salad"));

    assert_eq!(session.full_price(), usd(850));

    let mods = session.modifications();
    assert_eq!(mods.len(), 2);
    assert_eq!(mods[0].kind, ModificationKind::Remove);
    assert_eq!(mods[0].name, "Fries");
    assert_eq!(mods[1].kind, ModificationKind::Add);
    assert_eq!(mods[1].name, "Side Salad");
}

#[test]
fn test_removed_recipe_item_reports_only_the_removal() {
    let mut session = meal_session();
    let base = EntityRef::modifier_group("burger-base");
    session.toggle(&base, &EntityRef::modifier("pickles"));

    let mods = session.modifications();
    assert_eq!(mods.len(), 1);
    assert_eq!(mods[0].kind, ModificationKind::Remove);
    assert_eq!(mods[0].name, "Pickles");
    // Removing a free recipe item never changes the price.
    assert_eq!(session.full_price(), usd(700));
}

#[test]
fn test_intensity_change_reports_a_change() {
    let mut session = meal_session();
    let sauces = EntityRef::modifier_group("sauces");
    session.change_intensity(&sauces, &EntityRef::product("mayo"), "extra-mayo");

    let mods = session.modifications();
    assert_eq!(mods.len(), 1);
    assert_eq!(mods[0].kind, ModificationKind::Change);
    assert_eq!(session.full_price(), usd(750));
}

#[test]
fn test_reset_restores_the_initial_state() {
    let mut session = meal_session();
    let sides = EntityRef::modifier_group("sides");
    session.toggle(&sides, &EntityRef::product("salad"));
    assert_eq!(session.full_price(), usd(850));

    session.reset();
    assert_eq!(session.full_price(), usd(700));
    assert!(session.modifications().is_empty());
    assert_eq!(session.current(), session.initial());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut session = meal_session();
    session.toggle(
        &EntityRef::modifier_group("toppings"),
        &EntityRef::modifier("bacon"),
    );

    let snapshot = session.snapshot();
    assert!(!snapshot.is_combo);
    assert_eq!(snapshot.price_result.price, usd(825));

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"priceResult\""));
    assert!(json.contains("\"isCombo\":false"));
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_combo_open_rejects_plain_products() {
    let err = ComboSession::open(Arc::new(burger_catalog()), &EntityRef::product("burger-meal"))
        .unwrap_err();
    assert!(matches!(err, SessionError::NotACombo(_)));
}

#[test]
fn test_combo_slot_swap_prices_against_the_slot_default() {
    let catalog = Arc::new(burger_catalog());
    let mut session = ComboSession::open(catalog, &EntityRef::product("burger-combo")).unwrap();
    assert_eq!(session.full_price(), usd(800));
    assert_eq!(session.slots().len(), 2);

    session
        .change_product(
            &EntityRef::product_group("combo-drinks"),
            &EntityRef::product("shake"),
        )
        .unwrap();
    assert_eq!(session.full_price(), usd(950));
}

#[test]
fn test_combo_ambiguous_slot_swaps_for_free() {
    let catalog = Arc::new(burger_catalog());
    let mut session = ComboSession::open(catalog, &EntityRef::product("burger-combo")).unwrap();

    session
        .change_product(
            &EntityRef::product_group("combo-sides"),
            &EntityRef::product("salad"),
        )
        .unwrap();
    assert_eq!(session.full_price(), usd(800));

    let snapshot = session.snapshot();
    assert!(snapshot.is_combo);
    assert!(snapshot.combo_selection.is_some());
    // Slot swaps rebuild the slot baseline, so no modification is reported.
    assert!(snapshot.modifications.is_empty());
}

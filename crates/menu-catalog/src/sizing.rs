//! Virtual-price resolution
//!
//! A virtual product's own price is a placeholder (typically zero); the
//! meaningful price lives on its concrete size variants. These functions
//! walk the size-alternative relationship supplied by the catalog and pick
//! the variant the rules call for: explicit choice, else default variant,
//! else first variant, else the virtual entity's own price.

use crate::catalog::{CatalogSource, SizeVariant};
use crate::entity::Product;
use crate::fallback::effective_edge_price;
use crate::refs::EntityRef;
use rust_decimal::Decimal;

/// All size variants of a product, in group and menu order
fn all_variants<'a, C: CatalogSource>(catalog: &'a C, product: &Product) -> Vec<SizeVariant<'a>> {
    catalog
        .size_alternatives(product)
        .into_iter()
        .flat_map(|group| group.variants)
        .collect()
}

/// Resolved price of one variant (edge override first)
#[must_use]
pub fn variant_price<C: CatalogSource>(catalog: &C, variant: &SizeVariant<'_>) -> Option<Decimal> {
    let entity = catalog.resolve(&variant.item_ref)?;
    Some(effective_edge_price(&entity, Some(variant.overrides)))
}

/// Calorie total of one variant's entity, zero when unresolvable
#[must_use]
pub fn variant_calories<C: CatalogSource>(catalog: &C, variant: &SizeVariant<'_>) -> i64 {
    catalog
        .resolve(&variant.item_ref)
        .map(|entity| entity.calories())
        .unwrap_or(0)
}

/// The default-flagged size variant, if any
#[must_use]
pub fn default_size_variant<'a, C: CatalogSource>(
    catalog: &'a C,
    product: &Product,
) -> Option<SizeVariant<'a>> {
    all_variants(catalog, product).into_iter().find(|v| v.is_default)
}

/// A size variant by its bare entity id
#[must_use]
pub fn find_size_variant<'a, C: CatalogSource>(
    catalog: &'a C,
    product: &Product,
    id: &str,
) -> Option<SizeVariant<'a>> {
    all_variants(catalog, product)
        .into_iter()
        .find(|v| v.item_ref.id() == id)
}

/// Effective price of a (possibly virtual) product
///
/// Non-virtual products price as themselves. Virtual products resolve, in
/// order: the explicit variant when `explicit_size` is given and resolvable,
/// the default-flagged variant, the first variant, and finally the virtual
/// entity's own (possibly zero) price.
#[must_use]
pub fn effective_price<C: CatalogSource>(
    catalog: &C,
    product: &Product,
    explicit_size: Option<&EntityRef>,
) -> Decimal {
    if !product.is_virtual {
        return product.price;
    }

    let variants = all_variants(catalog, product);

    if let Some(want) = explicit_size {
        if let Some(price) = variants
            .iter()
            .find(|v| &v.item_ref == want)
            .and_then(|v| variant_price(catalog, v))
        {
            return price;
        }
    }

    if let Some(price) = variants
        .iter()
        .find(|v| v.is_default)
        .and_then(|v| variant_price(catalog, v))
    {
        return price;
    }

    if let Some(price) = variants.first().and_then(|v| variant_price(catalog, v)) {
        return price;
    }

    product.price
}

/// Upcharge for choosing a non-default size
///
/// `max(effective_price(selected) − effective_price(default), 0)`; zero when
/// either side is unavailable. Downgrades (a cheaper size) never credit.
#[must_use]
pub fn size_upcharge<C: CatalogSource>(
    catalog: &C,
    product: &Product,
    selected_size: &EntityRef,
) -> Decimal {
    let variants = all_variants(catalog, product);

    let selected = variants
        .iter()
        .find(|v| &v.item_ref == selected_size)
        .and_then(|v| variant_price(catalog, v));
    let default = variants
        .iter()
        .find(|v| v.is_default)
        .and_then(|v| variant_price(catalog, v));

    match (selected, default) {
        (Some(sel), Some(def)) => (sel - def).max(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::entity::{ChildOverride, ProductGroup};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_product(Product::new("burger", "Burger", Decimal::ZERO).virtual_product())
            .with_product(
                Product::new("burger-sm", "Small", Decimal::new(400, 2)).with_calories(500),
            )
            .with_product(
                Product::new("burger-md", "Medium", Decimal::new(500, 2))
                    .with_default(true)
                    .with_calories(700),
            )
            .with_product(
                Product::new("burger-lg", "Large", Decimal::new(600, 2)).with_calories(900),
            )
            .with_product_group(
                ProductGroup::new("burger-sizes", "Sizes")
                    .with_child(EntityRef::product("burger-sm"), ChildOverride::none())
                    .with_child(EntityRef::product("burger-md"), ChildOverride::none())
                    .with_child(EntityRef::product("burger-lg"), ChildOverride::none()),
            )
            .with_size_groups("burger", vec![EntityRef::product_group("burger-sizes")])
    }

    #[test]
    fn non_virtual_prices_as_itself() {
        let c = catalog();
        let small = c.product("burger-sm").unwrap();
        assert_eq!(effective_price(&c, small, None), Decimal::new(400, 2));
    }

    #[test]
    fn virtual_resolves_default_variant() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        assert_eq!(effective_price(&c, burger, None), Decimal::new(500, 2));
    }

    #[test]
    fn virtual_resolves_explicit_variant() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let large = EntityRef::product("burger-lg");
        assert_eq!(effective_price(&c, burger, Some(&large)), Decimal::new(600, 2));
    }

    #[test]
    fn virtual_unknown_explicit_falls_back_to_default() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let bogus = EntityRef::product("burger-xl");
        assert_eq!(effective_price(&c, burger, Some(&bogus)), Decimal::new(500, 2));
    }

    #[test]
    fn virtual_without_variants_prices_as_itself() {
        let c = Catalog::new()
            .with_product(Product::new("ghost", "Ghost", Decimal::ZERO).virtual_product());
        let ghost = c.product("ghost").unwrap();
        assert_eq!(effective_price(&c, ghost, None), Decimal::ZERO);
    }

    #[test]
    fn virtual_without_default_takes_first_variant() {
        let c = Catalog::new()
            .with_product(Product::new("combo", "Combo", Decimal::ZERO).virtual_product())
            .with_product(Product::new("combo-a", "A", Decimal::new(350, 2)))
            .with_product(Product::new("combo-b", "B", Decimal::new(450, 2)))
            .with_product_group(
                ProductGroup::new("combo-sizes", "Sizes")
                    .with_child(EntityRef::product("combo-a"), ChildOverride::none())
                    .with_child(EntityRef::product("combo-b"), ChildOverride::none()),
            )
            .with_size_groups("combo", vec![EntityRef::product_group("combo-sizes")]);
        let combo = c.product("combo").unwrap();
        assert_eq!(effective_price(&c, combo, None), Decimal::new(350, 2));
    }

    #[test]
    fn upcharge_large_over_default() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let large = EntityRef::product("burger-lg");
        assert_eq!(size_upcharge(&c, burger, &large), Decimal::new(100, 2));
    }

    #[test]
    fn upcharge_never_credits_downgrades() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let small = EntityRef::product("burger-sm");
        assert_eq!(size_upcharge(&c, burger, &small), Decimal::ZERO);
    }

    #[test]
    fn upcharge_zero_when_unresolvable() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let bogus = EntityRef::product("burger-xl");
        assert_eq!(size_upcharge(&c, burger, &bogus), Decimal::ZERO);
    }

    #[test]
    fn variant_lookup_by_id() {
        let c = catalog();
        let burger = c.product("burger").unwrap();
        let large = find_size_variant(&c, burger, "burger-lg").unwrap();
        assert_eq!(variant_price(&c, &large), Some(Decimal::new(600, 2)));
        assert_eq!(variant_calories(&c, &large), 900);
        assert!(default_size_variant(&c, burger).unwrap().item_ref.id() == "burger-md");
    }
}

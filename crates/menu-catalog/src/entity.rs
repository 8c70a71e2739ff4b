//! Catalog entity types
//!
//! The four entity kinds a reference can resolve to, plus:
//! - [`QuantityRule`]: min/max/default selection bounds
//! - [`ChildOverride`]: per-edge partial override of a child's fields
//! - [`Entity`]: borrowed tagged union set once at resolution time, so
//!   downstream code reads common fields without matching on kind
//!
//! Entities are read-only for the life of a customization session; nothing
//! in this workspace mutates them after catalog construction.

use crate::refs::EntityRef;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selection bounds for an item or a group
///
/// On an item, `min`/`max` bound the item's own quantity and `default` is
/// the quantity granted at build time. On a group (`selection_quantity`),
/// `min`/`max` bound the summed quantity across the group's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRule {
    /// Minimum quantity (unset means 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Maximum quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Default quantity granted at selection-build time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<u32>,
}

impl QuantityRule {
    /// Rule with all bounds set
    #[inline]
    #[must_use]
    pub fn new(min: u32, max: u32, default: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            default: Some(default),
        }
    }

    /// Exactly-one rule, i.e. a swap group's `selection_quantity`
    #[inline]
    #[must_use]
    pub fn exactly_one() -> Self {
        Self {
            min: Some(1),
            max: Some(1),
            default: None,
        }
    }

    /// Whether this rule pins the quantity to a single value
    #[inline]
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!((self.min, self.max), (Some(lo), Some(hi)) if lo == hi)
    }

    /// Whether this rule is the swap-group rule (`min == max == 1`)
    #[inline]
    #[must_use]
    pub fn is_swap(&self) -> bool {
        self.min == Some(1) && self.max == Some(1)
    }
}

/// Partial, per-edge override of a child's fields
///
/// Scoped to one parent→child edge, never to the child entity itself: the
/// same product can be default in one group and non-default in another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildOverride {
    /// Override the child's default flag on this edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Override the child's price on this edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Override the child's quantity rule on this edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<QuantityRule>,
}

impl ChildOverride {
    /// Override carrying no fields
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Override only the default flag
    #[inline]
    #[must_use]
    pub fn default_flag(is_default: bool) -> Self {
        Self {
            is_default: Some(is_default),
            ..Self::default()
        }
    }

    /// Whether any field is overridden on this edge
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_default.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

/// Ordered mapping from child reference to its per-edge override
pub type ChildRefs = IndexMap<EntityRef, ChildOverride>;

/// A sellable or composable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Entity id (the id portion of a `product:` reference)
    pub id: String,
    /// Display name
    pub name: String,
    /// Own price; not meaningful when `is_virtual`
    pub price: Decimal,
    /// Calorie total
    pub calories: i64,
    /// Whether this product is default where it appears (entity-level)
    pub is_default: bool,
    /// Whether this product is currently orderable
    pub is_available: bool,
    /// Whether this is a zero-priced placeholder over size variants
    pub is_virtual: bool,
    /// Whether selecting this clears its siblings (a "None" option)
    pub is_exclusive: bool,
    /// Whether this product's ingredient groups are expected composition
    pub is_recipe: bool,
    /// Whether this product is a multi-slot combo
    pub is_combo: bool,
    /// Own quantity bounds
    pub quantity: QuantityRule,
    /// Ingredient groups, in menu order (recipe composition)
    pub ingredient_refs: ChildRefs,
    /// Modifier groups, in menu order (add-ons, intensity scales, slots)
    pub modifier_group_refs: ChildRefs,
}

impl Product {
    /// New product with the given id, name and price; flags all false
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            calories: 0,
            is_default: false,
            is_available: true,
            is_virtual: false,
            is_exclusive: false,
            is_recipe: false,
            is_combo: false,
            quantity: QuantityRule::default(),
            ingredient_refs: ChildRefs::new(),
            modifier_group_refs: ChildRefs::new(),
        }
    }

    /// With calorie total
    #[inline]
    #[must_use]
    pub fn with_calories(mut self, calories: i64) -> Self {
        self.calories = calories;
        self
    }

    /// With entity-level default flag
    #[inline]
    #[must_use]
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Mark as virtual (size-variant placeholder)
    #[inline]
    #[must_use]
    pub fn virtual_product(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Mark as exclusive ("None" option)
    #[inline]
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.is_exclusive = true;
        self
    }

    /// Mark as a recipe product
    #[inline]
    #[must_use]
    pub fn recipe(mut self) -> Self {
        self.is_recipe = true;
        self
    }

    /// Mark as a combo product
    #[inline]
    #[must_use]
    pub fn combo(mut self) -> Self {
        self.is_combo = true;
        self
    }

    /// With own quantity bounds
    #[inline]
    #[must_use]
    pub fn with_quantity(mut self, quantity: QuantityRule) -> Self {
        self.quantity = quantity;
        self
    }

    /// Add an ingredient-group edge
    #[must_use]
    pub fn with_ingredient_group(mut self, group: EntityRef, ov: ChildOverride) -> Self {
        self.ingredient_refs.insert(group, ov);
        self
    }

    /// Add a modifier-group edge
    #[must_use]
    pub fn with_modifier_group(mut self, group: EntityRef, ov: ChildOverride) -> Self {
        self.modifier_group_refs.insert(group, ov);
        self
    }
}

/// A leaf option: an intensity level or a size variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    /// Entity id (the id portion of a `modifier:` reference)
    pub id: String,
    /// Display name
    pub name: String,
    /// Own price
    pub price: Decimal,
    /// Calorie total
    pub calories: i64,
    /// Whether this modifier is default where it appears (entity-level)
    pub is_default: bool,
    /// Whether this modifier is currently orderable
    pub is_available: bool,
    /// Whether selecting this clears its siblings (a "None" option)
    pub is_exclusive: bool,
    /// Own quantity bounds
    pub quantity: QuantityRule,
}

impl Modifier {
    /// New modifier with the given id, name and price; flags all false
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            calories: 0,
            is_default: false,
            is_available: true,
            is_exclusive: false,
            quantity: QuantityRule::default(),
        }
    }

    /// With calorie total
    #[inline]
    #[must_use]
    pub fn with_calories(mut self, calories: i64) -> Self {
        self.calories = calories;
        self
    }

    /// With entity-level default flag
    #[inline]
    #[must_use]
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Mark as exclusive ("None" option)
    #[inline]
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.is_exclusive = true;
        self
    }

    /// With own quantity bounds
    #[inline]
    #[must_use]
    pub fn with_quantity(mut self, quantity: QuantityRule) -> Self {
        self.quantity = quantity;
        self
    }
}

/// A group of modifiers with selection bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierGroup {
    /// Entity id (the id portion of a `modifier_group:` reference)
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether this group is default where it appears
    pub is_default: bool,
    /// Group-level selection bounds (summed over children)
    pub selection_quantity: QuantityRule,
    /// Children in menu order, with per-edge overrides
    pub child_refs: ChildRefs,
}

impl ModifierGroup {
    /// New empty group
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_default: false,
            selection_quantity: QuantityRule::default(),
            child_refs: ChildRefs::new(),
        }
    }

    /// With group-level selection bounds
    #[inline]
    #[must_use]
    pub fn with_selection_quantity(mut self, rule: QuantityRule) -> Self {
        self.selection_quantity = rule;
        self
    }

    /// Add a child edge
    #[must_use]
    pub fn with_child(mut self, child: EntityRef, ov: ChildOverride) -> Self {
        self.child_refs.insert(child, ov);
        self
    }
}

/// A group of products: combo slot, size alternatives or nested dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    /// Entity id (the id portion of a `product_group:` reference)
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether this group is default where it appears
    pub is_default: bool,
    /// Group-level selection bounds (summed over children)
    pub selection_quantity: QuantityRule,
    /// Children in menu order, with per-edge overrides
    pub child_refs: ChildRefs,
}

impl ProductGroup {
    /// New empty group
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_default: false,
            selection_quantity: QuantityRule::default(),
            child_refs: ChildRefs::new(),
        }
    }

    /// With group-level selection bounds
    #[inline]
    #[must_use]
    pub fn with_selection_quantity(mut self, rule: QuantityRule) -> Self {
        self.selection_quantity = rule;
        self
    }

    /// Add a child edge
    #[must_use]
    pub fn with_child(mut self, child: EntityRef, ov: ChildOverride) -> Self {
        self.child_refs.insert(child, ov);
        self
    }
}

/// Resolved catalog entity, tagged by kind
///
/// Borrowed from the catalog; the tag is set once at resolution time so no
/// downstream code narrows by string shape or casts.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    /// A product
    Product(&'a Product),
    /// A modifier
    Modifier(&'a Modifier),
    /// A modifier group
    ModifierGroup(&'a ModifierGroup),
    /// A product group
    ProductGroup(&'a ProductGroup),
}

impl<'a> Entity<'a> {
    /// Display name
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Product(p) => &p.name,
            Self::Modifier(m) => &m.name,
            Self::ModifierGroup(g) => &g.name,
            Self::ProductGroup(g) => &g.name,
        }
    }

    /// Own price; groups carry none and report zero
    #[must_use]
    pub fn price(&self) -> Decimal {
        match self {
            Self::Product(p) => p.price,
            Self::Modifier(m) => m.price,
            Self::ModifierGroup(_) | Self::ProductGroup(_) => Decimal::ZERO,
        }
    }

    /// Calorie total; groups carry none and report zero
    #[must_use]
    pub fn calories(&self) -> i64 {
        match self {
            Self::Product(p) => p.calories,
            Self::Modifier(m) => m.calories,
            Self::ModifierGroup(_) | Self::ProductGroup(_) => 0,
        }
    }

    /// Entity-level default flag
    #[must_use]
    pub fn is_default(&self) -> bool {
        match self {
            Self::Product(p) => p.is_default,
            Self::Modifier(m) => m.is_default,
            Self::ModifierGroup(g) => g.is_default,
            Self::ProductGroup(g) => g.is_default,
        }
    }

    /// Whether the entity is a virtual size-variant placeholder
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Product(p) if p.is_virtual)
    }

    /// Whether selecting the entity clears its siblings
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        match self {
            Self::Product(p) => p.is_exclusive,
            Self::Modifier(m) => m.is_exclusive,
            Self::ModifierGroup(_) | Self::ProductGroup(_) => false,
        }
    }

    /// Own quantity bounds; groups report the unset rule
    #[must_use]
    pub fn quantity_rule(&self) -> QuantityRule {
        match self {
            Self::Product(p) => p.quantity,
            Self::Modifier(m) => m.quantity,
            Self::ModifierGroup(_) | Self::ProductGroup(_) => QuantityRule::default(),
        }
    }

    /// The product, when this entity is one
    #[inline]
    #[must_use]
    pub fn as_product(&self) -> Option<&'a Product> {
        match self {
            Self::Product(p) => Some(p),
            _ => None,
        }
    }

    /// The modifier, when this entity is one
    #[inline]
    #[must_use]
    pub fn as_modifier(&self) -> Option<&'a Modifier> {
        match self {
            Self::Modifier(m) => Some(m),
            _ => None,
        }
    }

    /// Group-shaped view when this entity is either group kind
    #[must_use]
    pub fn as_group(&self) -> Option<GroupView<'a>> {
        match self {
            Self::ModifierGroup(g) => Some(GroupView {
                name: &g.name,
                selection_quantity: g.selection_quantity,
                child_refs: &g.child_refs,
            }),
            Self::ProductGroup(g) => Some(GroupView {
                name: &g.name,
                selection_quantity: g.selection_quantity,
                child_refs: &g.child_refs,
            }),
            _ => None,
        }
    }

    /// Whether the item carries a nested intensity sub-group
    ///
    /// True iff the item references at least one modifier group of its own
    /// and has no ingredient references; distinguishes a flavor/amount
    /// sub-choice from full nested composition.
    #[must_use]
    pub fn has_intensities(&self) -> bool {
        matches!(
            self,
            Self::Product(p) if !p.modifier_group_refs.is_empty() && p.ingredient_refs.is_empty()
        )
    }
}

/// Common group shape shared by [`ModifierGroup`] and [`ProductGroup`]
#[derive(Debug, Clone, Copy)]
pub struct GroupView<'a> {
    /// Display name
    pub name: &'a str,
    /// Group-level selection bounds
    pub selection_quantity: QuantityRule,
    /// Children in menu order
    pub child_refs: &'a ChildRefs,
}

impl GroupView<'_> {
    /// Whether this group is constrained to exactly one chosen member
    #[inline]
    #[must_use]
    pub fn is_swap(&self) -> bool {
        self.selection_quantity.is_swap()
    }

    /// Configured group maximum, if any
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<u32> {
        self.selection_quantity.max
    }

    /// Configured group minimum (unset means always satisfied)
    #[inline]
    #[must_use]
    pub fn min(&self) -> u32 {
        self.selection_quantity.min.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_rule_swap() {
        assert!(QuantityRule::exactly_one().is_swap());
        assert!(!QuantityRule::new(0, 3, 1).is_swap());
    }

    #[test]
    fn quantity_rule_fixed() {
        assert!(QuantityRule::new(2, 2, 2).is_fixed());
        assert!(!QuantityRule::default().is_fixed());
    }

    #[test]
    fn child_override_emptiness() {
        assert!(ChildOverride::none().is_empty());
        assert!(!ChildOverride::default_flag(true).is_empty());
    }

    #[test]
    fn entity_common_accessors() {
        let p = Product::new("p1", "Burger", Decimal::new(500, 2)).with_calories(550);
        let e = Entity::Product(&p);
        assert_eq!(e.name(), "Burger");
        assert_eq!(e.price(), Decimal::new(500, 2));
        assert_eq!(e.calories(), 550);
        assert!(!e.is_virtual());
    }

    #[test]
    fn group_view_over_both_kinds() {
        let mg = ModifierGroup::new("g1", "Toppings")
            .with_selection_quantity(QuantityRule::exactly_one());
        let pg = ProductGroup::new("g2", "Sides");
        assert!(Entity::ModifierGroup(&mg).as_group().unwrap().is_swap());
        assert!(!Entity::ProductGroup(&pg).as_group().unwrap().is_swap());
        assert!(Entity::Product(&Product::new("p", "P", Decimal::ZERO))
            .as_group()
            .is_none());
    }

    #[test]
    fn has_intensities_requires_modifier_groups_without_ingredients() {
        let bare = Product::new("p1", "Mayo", Decimal::ZERO);
        assert!(!Entity::Product(&bare).has_intensities());

        let with_amounts = Product::new("p2", "Mayo", Decimal::ZERO).with_modifier_group(
            EntityRef::modifier_group("amounts"),
            ChildOverride::none(),
        );
        assert!(Entity::Product(&with_amounts).has_intensities());

        let composed = with_amounts
            .with_ingredient_group(EntityRef::modifier_group("base"), ChildOverride::none());
        assert!(!Entity::Product(&composed).has_intensities());
    }
}

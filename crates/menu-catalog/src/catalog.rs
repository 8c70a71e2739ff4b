//! Catalog store and the resolver contract
//!
//! [`CatalogSource`] is the seam every downstream component consumes:
//! reference resolution plus size-alternative lookup for virtual products.
//! [`Catalog`] is the in-memory implementation. Loading a catalog from a
//! remote menu feed is an external concern; this store only holds it.

use crate::entity::{ChildOverride, Entity, Modifier, ModifierGroup, Product, ProductGroup};
use crate::fallback::effective_is_default;
use crate::refs::{EntityKind, EntityRef};
use indexmap::IndexMap;

/// Read-only source of catalog entities
///
/// All engine operations are total over this contract: an unresolvable
/// reference yields `None` and callers degrade to zero price, zero calories
/// or an empty collection instead of failing.
pub trait CatalogSource {
    /// Resolve a reference to its entity, if present
    fn resolve(&self, entity_ref: &EntityRef) -> Option<Entity<'_>>;

    /// Size-alternative groups for a (possibly virtual) product
    ///
    /// Empty for products with no size relationship.
    fn size_alternatives(&self, product: &Product) -> Vec<SizeGroup<'_>>;
}

/// One size-alternative group of a virtual product
#[derive(Debug, Clone)]
pub struct SizeGroup<'a> {
    /// Reference of the underlying product group
    pub group_ref: EntityRef,
    /// Display name of the group
    pub group_name: &'a str,
    /// Concrete variants in menu order
    pub variants: Vec<SizeVariant<'a>>,
}

/// One concrete variant inside a size-alternative group
#[derive(Debug, Clone)]
pub struct SizeVariant<'a> {
    /// Reference of the variant product
    pub item_ref: EntityRef,
    /// Whether this variant is the default (edge override first)
    pub is_default: bool,
    /// Per-edge override carried on the group→variant edge
    pub overrides: &'a ChildOverride,
}

/// In-memory catalog
///
/// Entity tables are insertion-ordered; order is semantically significant
/// for group children and is preserved end to end. The catalog is immutable
/// once built and safe for concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: IndexMap<String, Product>,
    modifiers: IndexMap<String, Modifier>,
    modifier_groups: IndexMap<String, ModifierGroup>,
    product_groups: IndexMap<String, ProductGroup>,
    /// Virtual product id → refs of its size-alternative product groups
    size_groups: IndexMap<String, Vec<EntityRef>>,
}

impl Catalog {
    /// Empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, keyed by its id
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id.clone(), product);
        self
    }

    /// Insert a modifier, keyed by its id
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier.id.clone(), modifier);
        self
    }

    /// Insert a modifier group, keyed by its id
    #[must_use]
    pub fn with_modifier_group(mut self, group: ModifierGroup) -> Self {
        self.modifier_groups.insert(group.id.clone(), group);
        self
    }

    /// Insert a product group, keyed by its id
    #[must_use]
    pub fn with_product_group(mut self, group: ProductGroup) -> Self {
        self.product_groups.insert(group.id.clone(), group);
        self
    }

    /// Attach size-alternative groups to a (virtual) product id
    #[must_use]
    pub fn with_size_groups(
        mut self,
        product_id: impl Into<String>,
        groups: Vec<EntityRef>,
    ) -> Self {
        self.size_groups.insert(product_id.into(), groups);
        self
    }

    /// Look up a product by id
    #[inline]
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }
}

impl CatalogSource for Catalog {
    fn resolve(&self, entity_ref: &EntityRef) -> Option<Entity<'_>> {
        let id = entity_ref.id();
        match entity_ref.kind() {
            EntityKind::Product => self.products.get(id).map(Entity::Product),
            EntityKind::Modifier => self.modifiers.get(id).map(Entity::Modifier),
            EntityKind::ModifierGroup => self.modifier_groups.get(id).map(Entity::ModifierGroup),
            EntityKind::ProductGroup => self.product_groups.get(id).map(Entity::ProductGroup),
        }
    }

    fn size_alternatives(&self, product: &Product) -> Vec<SizeGroup<'_>> {
        let Some(group_refs) = self.size_groups.get(&product.id) else {
            return Vec::new();
        };

        group_refs
            .iter()
            .filter_map(|group_ref| {
                let group = match self.resolve(group_ref) {
                    Some(Entity::ProductGroup(g)) => g,
                    _ => return None,
                };
                let variants = group
                    .child_refs
                    .iter()
                    .map(|(item_ref, overrides)| {
                        let is_default = self
                            .resolve(item_ref)
                            .map(|entity| effective_is_default(&entity, Some(overrides)))
                            .unwrap_or(false);
                        SizeVariant {
                            item_ref: item_ref.clone(),
                            is_default,
                            overrides,
                        }
                    })
                    .collect();
                Some(SizeGroup {
                    group_ref: group_ref.clone(),
                    group_name: &group.name,
                    variants,
                })
            })
            .collect()
    }
}

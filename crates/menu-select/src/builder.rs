//! Initial selection construction
//!
//! [`SelectionBuilder`] produces the selection tree a customization session
//! starts from: every group a product references, populated with its default
//! quantities, default intensity choices and nested recipe composition.

use crate::error::SelectionError;
use crate::tree::{SelectedGroup, SelectedItem, SelectedModifiers};
use menu_catalog::{
    default_intensity, effective_default_quantity, effective_is_default, exclusive_intensity,
    intensity_group, CatalogSource, Entity, GroupView, Product,
};

/// Default recursion guard for nested ingredient composition
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Builds the initial selection tree for a product
#[derive(Debug, Clone, Copy)]
pub struct SelectionBuilder<'a, C: CatalogSource> {
    catalog: &'a C,
    max_depth: usize,
}

impl<'a, C: CatalogSource> SelectionBuilder<'a, C> {
    /// New builder with the default depth guard
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// With a custom recursion depth limit
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the initial selection tree for `product`
    ///
    /// Ingredient groups come first, then modifier groups, each in catalog
    /// insertion order. Unresolvable group or child references are skipped.
    ///
    /// # Errors
    /// [`SelectionError::DepthExceeded`] when nested composition (or a
    /// reference cycle in the catalog) exceeds the configured depth limit.
    pub fn build_initial(&self, product: &Product) -> Result<SelectedModifiers, SelectionError> {
        self.build_product(product, 0)
    }

    fn build_product(
        &self,
        product: &Product,
        depth: usize,
    ) -> Result<SelectedModifiers, SelectionError> {
        if depth >= self.max_depth {
            return Err(SelectionError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let mut tree = SelectedModifiers::new();
        let group_refs = product
            .ingredient_refs
            .keys()
            .chain(product.modifier_group_refs.keys());

        for group_ref in group_refs {
            let Some(view) = self.catalog.resolve(group_ref).and_then(|e| e.as_group()) else {
                continue;
            };
            let group = self.build_group(&view, depth)?;
            tree.insert(group_ref.clone(), group);
        }
        Ok(tree)
    }

    fn build_group(
        &self,
        view: &GroupView<'_>,
        depth: usize,
    ) -> Result<SelectedGroup, SelectionError> {
        let swap = view.is_swap();
        let group_max = view.max();
        let mut granted: u32 = 0;
        let mut group = SelectedGroup::new();

        for (child_ref, ov) in view.child_refs {
            let Some(entity) = self.catalog.resolve(child_ref) else {
                continue;
            };

            // Accordion child: the entry is the chosen member of the nested
            // group, not the group itself.
            if child_ref.is_product_group() {
                if let Some(item) = self.build_accordion(&entity, child_ref.id(), depth)? {
                    group.insert(item.0, item.1);
                }
                continue;
            }

            let mut quantity = effective_default_quantity(&entity, Some(ov));

            // Swap group: only the first nonzero default keeps it. Elsewhere
            // defaults stop once the group max is reached.
            if swap && granted > 0 {
                quantity = 0;
            } else if let Some(max) = group_max {
                quantity = quantity.min(max.saturating_sub(granted));
            }
            granted += quantity;

            let mut item = SelectedItem::with_quantity(quantity);

            if let Some(product) = entity.as_product() {
                if entity.has_intensities() {
                    item.sub_item_id = self.initial_intensity(product, quantity);
                } else if !product.ingredient_refs.is_empty() {
                    item.selection = Some(self.build_product(product, depth + 1)?);
                }
            }

            group.insert(child_ref.clone(), item);
        }
        Ok(group)
    }

    /// Pick the accordion entry: first default-flagged child, else first
    fn build_accordion(
        &self,
        nested: &Entity<'_>,
        nested_group_id: &str,
        depth: usize,
    ) -> Result<Option<(menu_catalog::EntityRef, SelectedItem)>, SelectionError> {
        let Some(view) = nested.as_group() else {
            return Ok(None);
        };

        let chosen = view
            .child_refs
            .iter()
            .find(|(child_ref, ov)| {
                self.catalog
                    .resolve(child_ref)
                    .map(|e| effective_is_default(&e, Some(ov)))
                    .unwrap_or(false)
            })
            .or_else(|| view.child_refs.iter().next());

        let Some((chosen_ref, _)) = chosen else {
            return Ok(None);
        };

        let mut item = SelectedItem::with_quantity(1);
        item.group_id = Some(nested_group_id.to_string());

        if let Some(product) = self
            .catalog
            .resolve(chosen_ref)
            .and_then(|e| e.as_product())
        {
            if !product.ingredient_refs.is_empty() {
                item.selection = Some(self.build_product(product, depth + 1)?);
            }
        }

        Ok(Some((chosen_ref.clone(), item)))
    }

    /// Initial intensity choice for an intensity-capable item
    ///
    /// Quantity zero starts on the exclusive ("None") option, falling back
    /// to the default option; nonzero starts on the default option.
    fn initial_intensity(&self, product: &Product, quantity: u32) -> Option<String> {
        let (_, group) = intensity_group(self.catalog, product)?;
        let default = default_intensity(self.catalog, group).map(|(r, _)| r.id().to_string());
        if quantity == 0 {
            exclusive_intensity(self.catalog, group)
                .map(|(r, _)| r.id().to_string())
                .or(default)
        } else {
            default
        }
    }
}

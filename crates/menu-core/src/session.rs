//! Single-product customization sessions

use crate::error::SessionError;
use crate::snapshot::SessionSnapshot;
use menu_catalog::{effective_price, CatalogSource, EntityRef, Product};
use menu_pricing::{aggregate, full_price, PriceAndCalories};
use menu_select::{
    change_intensity, decrease, increase, is_complete, modifications, toggle, unsatisfied_groups,
    Modification, SelectedModifiers, SelectionBuilder,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// A customization session for one product
///
/// Owns the initial and current selection trees; every operation mutates
/// `current` in place and leaves `initial` untouched for diffing and
/// restore-on-deselect semantics.
#[derive(Debug, Clone)]
pub struct CustomizeSession<C: CatalogSource> {
    catalog: Arc<C>,
    product: Product,
    initial: SelectedModifiers,
    current: SelectedModifiers,
}

impl<C: CatalogSource> CustomizeSession<C> {
    /// Open a session on the referenced product
    ///
    /// # Errors
    /// [`SessionError::UnknownProduct`] when the reference does not resolve
    /// to a product; [`SessionError::Selection`] when the initial tree
    /// cannot be built.
    pub fn open(catalog: Arc<C>, product_ref: &EntityRef) -> Result<Self, SessionError> {
        let product = catalog
            .resolve(product_ref)
            .and_then(|e| e.as_product().cloned())
            .ok_or_else(|| SessionError::UnknownProduct(product_ref.clone()))?;
        let initial = SelectionBuilder::new(catalog.as_ref()).build_initial(&product)?;
        debug!(product = %product_ref, groups = initial.len(), "session opened");

        Ok(Self {
            catalog,
            product,
            current: initial.clone(),
            initial,
        })
    }

    /// The product under customization
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Current selection tree
    #[inline]
    #[must_use]
    pub fn current(&self) -> &SelectedModifiers {
        &self.current
    }

    /// Initial selection tree
    #[inline]
    #[must_use]
    pub fn initial(&self) -> &SelectedModifiers {
        &self.initial
    }

    /// Toggle an item on or off
    pub fn toggle(&mut self, group_ref: &EntityRef, item_ref: &EntityRef) {
        debug!(group = %group_ref, item = %item_ref, "toggle");
        toggle(
            self.catalog.as_ref(),
            &mut self.current,
            group_ref,
            item_ref,
            &self.initial,
        );
    }

    /// Increase an item's quantity by one, clamped by capacity
    pub fn increase(&mut self, group_ref: &EntityRef, item_ref: &EntityRef) {
        debug!(group = %group_ref, item = %item_ref, "increase");
        increase(self.catalog.as_ref(), &mut self.current, group_ref, item_ref);
    }

    /// Decrease an item's quantity by one, flooring at zero
    pub fn decrease(&mut self, group_ref: &EntityRef, item_ref: &EntityRef) {
        debug!(group = %group_ref, item = %item_ref, "decrease");
        decrease(&mut self.current, group_ref, item_ref);
    }

    /// Set an item's intensity (or explicit size) choice
    pub fn change_intensity(
        &mut self,
        group_ref: &EntityRef,
        item_ref: &EntityRef,
        sub_item_id: &str,
    ) {
        debug!(group = %group_ref, item = %item_ref, sub = sub_item_id, "change intensity");
        change_intensity(
            self.catalog.as_ref(),
            &mut self.current,
            group_ref,
            item_ref,
            sub_item_id,
        );
    }

    /// Discard all edits, restoring the initial selection
    pub fn reset(&mut self) {
        debug!(product = %self.product.id, "session reset");
        self.current = self.initial.clone();
    }

    /// Effective base price of the product (virtual products resolved)
    #[must_use]
    pub fn base_price(&self) -> Decimal {
        effective_price(self.catalog.as_ref(), &self.product, None)
    }

    /// Final charged price: base plus selection aggregate, rounded to cents
    #[must_use]
    pub fn full_price(&self) -> Decimal {
        let agg = aggregate(self.catalog.as_ref(), &self.current);
        full_price(self.base_price(), &agg)
    }

    /// Total price and calories of the current selection
    #[must_use]
    pub fn price_summary(&self) -> PriceAndCalories {
        let agg = aggregate(self.catalog.as_ref(), &self.current);
        PriceAndCalories::new(
            full_price(self.base_price(), &agg),
            self.product.calories + agg.calories,
        )
    }

    /// Groups still below their configured minimum
    #[must_use]
    pub fn unsatisfied_groups(&self) -> Vec<EntityRef> {
        unsatisfied_groups(self.catalog.as_ref(), &self.current)
    }

    /// Whether every group meets its configured minimum
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_complete(self.catalog.as_ref(), &self.current)
    }

    /// Changes against the initial selection
    #[must_use]
    pub fn modifications(&self) -> Vec<Modification> {
        modifications(
            self.catalog.as_ref(),
            &self.product,
            &self.current,
            &self.initial,
        )
    }

    /// Serializable point-in-time state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_ingredients: self.current.clone(),
            combo_selection: None,
            price_result: self.price_summary(),
            is_combo: false,
            modifications: self.modifications(),
        }
    }
}

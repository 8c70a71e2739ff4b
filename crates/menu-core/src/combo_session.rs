//! Combo customization sessions

use crate::error::SessionError;
use crate::snapshot::SessionSnapshot;
use menu_catalog::{CatalogSource, EntityRef, Product};
use menu_pricing::{combo_aggregate, combo_full_price, PriceAndCalories};
use menu_select::{
    build_initial_combo, change_combo_product, combo_options, modifications, toggle_combo_modifier,
    ComboSelection, ComboSlot, Modification,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// A customization session for one combo product
///
/// Tracks an initial and a current [`ComboSelection`]; swapping a slot's
/// product rebuilds both sides of that slot, so per-slot diffs always compare
/// against the chosen product's own defaults.
#[derive(Debug, Clone)]
pub struct ComboSession<C: CatalogSource> {
    catalog: Arc<C>,
    combo: Product,
    initial: ComboSelection,
    current: ComboSelection,
}

impl<C: CatalogSource> ComboSession<C> {
    /// Open a session on the referenced combo product
    ///
    /// # Errors
    /// [`SessionError::UnknownProduct`] when the reference does not resolve
    /// to a product, [`SessionError::NotACombo`] when it resolves to a
    /// non-combo product, [`SessionError::Selection`] when a slot tree
    /// cannot be built.
    pub fn open(catalog: Arc<C>, combo_ref: &EntityRef) -> Result<Self, SessionError> {
        let combo = catalog
            .resolve(combo_ref)
            .and_then(|e| e.as_product().cloned())
            .ok_or_else(|| SessionError::UnknownProduct(combo_ref.clone()))?;
        if !combo.is_combo {
            return Err(SessionError::NotACombo(combo_ref.clone()));
        }
        let initial = build_initial_combo(catalog.as_ref(), &combo)?;
        debug!(combo = %combo_ref, slots = initial.len(), "combo session opened");

        Ok(Self {
            catalog,
            combo,
            current: initial.clone(),
            initial,
        })
    }

    /// The combo product under customization
    #[inline]
    #[must_use]
    pub fn combo(&self) -> &Product {
        &self.combo
    }

    /// Current combo selection
    #[inline]
    #[must_use]
    pub fn current(&self) -> &ComboSelection {
        &self.current
    }

    /// The combo's slots with priced options, in menu order
    #[must_use]
    pub fn slots(&self) -> Vec<ComboSlot> {
        combo_options(self.catalog.as_ref(), &self.combo)
    }

    /// Swap a slot to a different product
    ///
    /// Rebuilds the slot's nested tree from the new product's defaults on
    /// both the current and initial side.
    ///
    /// # Errors
    /// [`SessionError::Selection`] when the new product's tree cannot be
    /// built.
    pub fn change_product(
        &mut self,
        slot_ref: &EntityRef,
        product_ref: &EntityRef,
    ) -> Result<(), SessionError> {
        debug!(slot = %slot_ref, product = %product_ref, "change combo product");
        change_combo_product(self.catalog.as_ref(), &mut self.current, slot_ref, product_ref)?;
        change_combo_product(self.catalog.as_ref(), &mut self.initial, slot_ref, product_ref)?;
        Ok(())
    }

    /// Toggle a modifier inside one slot's nested tree
    pub fn toggle_modifier(
        &mut self,
        slot_ref: &EntityRef,
        group_ref: &EntityRef,
        item_ref: &EntityRef,
    ) {
        debug!(slot = %slot_ref, group = %group_ref, item = %item_ref, "toggle combo modifier");
        let Some(initial) = self.initial.slot(slot_ref).map(|s| s.selection.clone()) else {
            return;
        };
        toggle_combo_modifier(
            self.catalog.as_ref(),
            &mut self.current,
            slot_ref,
            group_ref,
            item_ref,
            &initial,
        );
    }

    /// Final charged price of the combo, rounded to cents
    #[must_use]
    pub fn full_price(&self) -> Decimal {
        combo_full_price(self.catalog.as_ref(), &self.combo, &self.current)
    }

    /// Total price and calories of the current combo selection
    #[must_use]
    pub fn price_summary(&self) -> PriceAndCalories {
        let agg = combo_aggregate(self.catalog.as_ref(), &self.combo, &self.current);
        PriceAndCalories::new(self.full_price(), self.combo.calories + agg.calories)
    }

    /// Changes against the initial selection, across all slots
    #[must_use]
    pub fn modifications(&self) -> Vec<Modification> {
        self.current
            .iter()
            .filter_map(|(slot_ref, slot)| {
                let initial = self.initial.slot(slot_ref)?;
                let product = self
                    .catalog
                    .resolve(&slot.product_ref)
                    .and_then(|e| e.as_product())?;
                Some(modifications(
                    self.catalog.as_ref(),
                    product,
                    &slot.selection,
                    &initial.selection,
                ))
            })
            .flatten()
            .collect()
    }

    /// Serializable point-in-time state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_ingredients: menu_select::SelectedModifiers::new(),
            combo_selection: Some(self.current.clone()),
            price_result: self.price_summary(),
            is_combo: true,
            modifications: self.modifications(),
        }
    }
}

//! Resolve-with-fallback helpers
//!
//! Each fallback chain in the engine (default quantity, item maximum, edge
//! price, default flag) lives here as one named function, so the fallback
//! order is a single auditable point rather than scattered inline
//! option-chaining.

use crate::entity::{ChildOverride, Entity, QuantityRule};
use rust_decimal::Decimal;

/// Effective default flag: edge override, else entity
#[inline]
#[must_use]
pub fn effective_is_default(entity: &Entity<'_>, ov: Option<&ChildOverride>) -> bool {
    ov.and_then(|o| o.is_default).unwrap_or_else(|| entity.is_default())
}

/// Effective quantity rule: edge override fields over entity fields
#[must_use]
pub fn effective_quantity_rule(entity: &Entity<'_>, ov: Option<&ChildOverride>) -> QuantityRule {
    let base = entity.quantity_rule();
    let Some(over) = ov.and_then(|o| o.quantity) else {
        return base;
    };
    QuantityRule {
        min: over.min.or(base.min),
        max: over.max.or(base.max),
        default: over.default.or(base.default),
    }
}

/// Effective default quantity granted at selection-build time
///
/// Edge-override default, else entity default, else 1 if the item is
/// effectively default-flagged, else 0.
#[must_use]
pub fn effective_default_quantity(entity: &Entity<'_>, ov: Option<&ChildOverride>) -> u32 {
    effective_quantity_rule(entity, ov)
        .default
        .unwrap_or_else(|| u32::from(effective_is_default(entity, ov)))
}

/// Effective per-item maximum: edge-override max, else entity max, else 1
#[inline]
#[must_use]
pub fn effective_item_max(entity: &Entity<'_>, ov: Option<&ChildOverride>) -> u32 {
    effective_quantity_rule(entity, ov).max.unwrap_or(1)
}

/// Effective price on one edge: edge-override price, else entity price
#[inline]
#[must_use]
pub fn effective_edge_price(entity: &Entity<'_>, ov: Option<&ChildOverride>) -> Decimal {
    ov.and_then(|o| o.price).unwrap_or_else(|| entity.price())
}

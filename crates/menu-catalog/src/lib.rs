//! Menu Catalog - data model and resolution rules
//!
//! The read-only half of the customization engine:
//! - Entity types linked by typed references with per-edge overrides
//! - The [`CatalogSource`] resolver contract and an in-memory [`Catalog`]
//! - Interaction-mode classification (radio/checkbox/static/accordion)
//! - Virtual-price resolution over size-variant relationships
//! - Named resolve-with-fallback helpers
//!
//! # Example
//!
//! ```rust
//! use menu_catalog::{Catalog, CatalogSource, EntityRef, Product};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new()
//!     .with_product(Product::new("fries", "Fries", Decimal::new(299, 2)));
//!
//! let entity = catalog.resolve(&EntityRef::product("fries")).unwrap();
//! assert_eq!(entity.name(), "Fries");
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod classify;
pub mod entity;
pub mod fallback;
pub mod refs;
pub mod sizing;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogSource, SizeGroup, SizeVariant};
pub use classify::{
    action_kind, default_intensity, exclusive_intensity, intensity_group, intensity_member,
    ActionKind,
};
pub use entity::{
    ChildOverride, ChildRefs, Entity, GroupView, Modifier, ModifierGroup, Product, ProductGroup,
    QuantityRule,
};
pub use fallback::{
    effective_default_quantity, effective_edge_price, effective_is_default, effective_item_max,
    effective_quantity_rule,
};
pub use refs::{EntityKind, EntityRef, RefError};
pub use sizing::{
    default_size_variant, effective_price, find_size_variant, size_upcharge, variant_calories,
    variant_price,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

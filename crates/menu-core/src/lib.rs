//! Menu Core - customization session facades
//!
//! Ties the catalog, selection and pricing layers into two session types:
//! - [`CustomizeSession`] for single products
//! - [`ComboSession`] for multi-slot combo products
//!
//! Sessions own their state; the catalog is shared behind an [`Arc`] and
//! never mutated. Operations emit `tracing` events at debug level; embedders
//! choose a subscriber (tests use `tracing-subscriber`).
//!
//! [`Arc`]: std::sync::Arc
//!
//! # Example
//!
//! ```rust
//! use menu_core::CustomizeSession;
//! use menu_catalog::{Catalog, EntityRef, Product};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(
//!     Catalog::new().with_product(Product::new("fries", "Fries", Decimal::new(299, 2))),
//! );
//! let session = CustomizeSession::open(catalog, &EntityRef::product("fries")).unwrap();
//! assert_eq!(session.full_price(), Decimal::new(299, 2));
//! ```

#![warn(unreachable_pub)]

pub mod combo_session;
pub mod error;
pub mod session;
pub mod snapshot;

// Re-exports for convenience
pub use combo_session::ComboSession;
pub use error::SessionError;
pub use session::CustomizeSession;
pub use snapshot::SessionSnapshot;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

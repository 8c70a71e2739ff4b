//! Menu Pricing - deltas, aggregates and final prices
//!
//! The arithmetic half of the customization engine:
//! - [`PriceAndCalories`] pairs and the per-item delta cases
//! - [`aggregate`] walks a selection tree into one delta
//! - [`full_price`] / [`combo_full_price`] round to charged cents
//!
//! All prices are [`rust_decimal::Decimal`]; nothing here touches floats.

#![warn(unreachable_pub)]

pub mod aggregate;
pub mod combo;
pub mod delta;

// Re-exports for convenience
pub use aggregate::{aggregate, full_price};
pub use combo::{combo_aggregate, combo_full_price, slot_upcharge};
pub use delta::{item_delta, PriceAndCalories};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

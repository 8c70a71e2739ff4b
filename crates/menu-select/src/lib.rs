//! Menu Select - selection trees and the selection state machine
//!
//! The mutable half of the customization engine:
//! - [`SelectedModifiers`] trees built once per session by
//!   [`SelectionBuilder`]
//! - Toggle/increase/decrease/intensity operations under capacity and
//!   exclusivity constraints
//! - Completeness checks and current-vs-initial modification summaries
//! - The combo slot model for multi-slot products
//!
//! Everything here is synchronous and side-effect-free: an operation maps a
//! read-only catalog, a tree and arguments to a new tree state, never
//! blocking or performing I/O.

#![warn(unreachable_pub)]

pub mod builder;
pub mod combo;
pub mod diff;
pub mod error;
pub mod ops;
pub mod tree;

// Re-exports for convenience
pub use builder::{SelectionBuilder, DEFAULT_MAX_DEPTH};
pub use combo::{
    build_initial_combo, change_combo_product, combo_options, slot_refs, toggle_combo_modifier,
    ComboOption, ComboSelection, ComboSlot, ComboSlotSelection,
};
pub use diff::{modifications, Modification, ModificationKind};
pub use error::SelectionError;
pub use ops::{change_intensity, decrease, increase, is_complete, toggle, unsatisfied_groups};
pub use tree::{SelectedGroup, SelectedItem, SelectedModifiers};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

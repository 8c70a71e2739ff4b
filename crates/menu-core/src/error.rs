//! Error types for session construction

use menu_catalog::EntityRef;
use menu_select::SelectionError;

/// Errors raised while opening or driving a customization session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The reference does not resolve to a product in the catalog
    #[error("unknown product reference `{0}`")]
    UnknownProduct(EntityRef),

    /// A combo session was requested for a product without the combo flag
    #[error("product `{0}` is not a combo")]
    NotACombo(EntityRef),

    /// Building a selection tree failed
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

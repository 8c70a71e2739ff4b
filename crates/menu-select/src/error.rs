//! Error types for selection building

/// Errors raised while building selection trees
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Catalog nesting exceeded the recursion guard
    ///
    /// A reference cycle in the catalog would otherwise drive unbounded
    /// recursion through nested ingredient composition.
    #[error("selection nesting exceeded depth limit {limit}")]
    DepthExceeded {
        /// The configured depth limit that was hit
        limit: usize,
    },
}

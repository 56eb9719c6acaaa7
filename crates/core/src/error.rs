//! Error types for boxpack.

use thiserror::Error;

/// Result type alias for boxpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building catalogs or validating input.
///
/// The packing path itself never fails: products that cannot be packed are
/// reported as diagnostics instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Dimensions are zero, negative or not finite.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Catalog definition rejected.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two catalog entries share a name.
    #[error("Duplicate box name in catalog: {0}")]
    DuplicateBoxName(String),

    /// Catalog without any entry.
    #[error("Catalog must contain at least one box")]
    EmptyCatalog,

    /// Order failed validation.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(String),
}

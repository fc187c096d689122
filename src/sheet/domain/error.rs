//! Error types for sheet domain validation.

use thiserror::Error;

/// Errors returned while constructing sheet domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SheetDomainError {
    /// Two layout roles point at the same column index.
    #[error("column index {0} is assigned to more than one role")]
    DuplicateColumn(usize),

    /// A marker substring is empty after trimming.
    #[error("marker substring must not be empty")]
    EmptyMarker,
}

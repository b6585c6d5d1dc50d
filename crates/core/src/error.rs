//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of catalog queries. Presentation
/// and process concerns belong in the binary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed catalog input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An aggregate was requested over an empty set (e.g. average of nothing).
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// An amount exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// A result that requires at least one product was requested from an empty catalog.
    #[error("catalog is empty")]
    EmptyCatalog,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn empty_catalog() -> Self {
        Self::EmptyCatalog
    }
}

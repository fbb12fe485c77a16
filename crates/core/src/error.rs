//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. A lookup
/// miss is recoverable by the caller; infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No catalog record matched the requested code.
    #[error("product not found")]
    NotFound,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }
}

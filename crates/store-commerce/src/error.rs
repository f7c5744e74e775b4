//! Commerce error types.

use crate::repository::RepositoryError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Page number must be 1 or greater.
    #[error("Invalid page number: {0}")]
    InvalidPage(i64),

    /// Page size must be 1 or greater.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Text that is not a decimal amount.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The cart session store cannot be used.
    #[error("Cart session store unavailable: {0}")]
    SessionUnavailable(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Persistence failure reported by the repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CommerceError {
    /// Whether the error was caused by a bad caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidPage(_)
                | CommerceError::InvalidPageSize(_)
                | CommerceError::InvalidQuantity(_)
                | CommerceError::QuantityExceedsLimit(..)
                | CommerceError::InvalidAmount(_)
                | CommerceError::CurrencyMismatch { .. }
                | CommerceError::ValidationError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(CommerceError::InvalidPage(0).is_invalid_argument());
        assert!(CommerceError::InvalidQuantity(-1).is_invalid_argument());
        assert!(!CommerceError::ProductNotFound(7).is_invalid_argument());
        assert!(!CommerceError::Repository(RepositoryError::DuplicateId(3)).is_invalid_argument());
    }

    #[test]
    fn test_repository_errors_pass_through() {
        let err: CommerceError = RepositoryError::DuplicateId(3).into();
        assert_eq!(err.to_string(), RepositoryError::DuplicateId(3).to_string());
    }
}

//! # Error Module
//!
//! Domain errors for Bankacct using thiserror. Every failure is a local
//! validation failure: the operation that raised it has not mutated anything.

use crate::email::EmailError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    pub fn is_invalid_email(&self) -> bool {
        matches!(self, CoreError::InvalidEmail(_))
    }
}

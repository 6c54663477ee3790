//! Core error types.

use thiserror::Error;

/// Catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Position is past the end of the catalog.
    #[error("invalid position {position} (catalog holds {len} gift(s))")]
    InvalidPosition {
        /// Requested position.
        position: usize,
        /// Catalog length at the time of the request.
        len: usize,
    },

    /// Quantity delta would take a quantity below zero.
    #[error("quantity of '{name}' is {quantity}, cannot apply delta {delta}")]
    QuantityUnderflow {
        /// Name of the affected gift.
        name: String,
        /// Quantity before the delta.
        quantity: u64,
        /// Rejected delta.
        delta: i64,
    },
}

impl Error {
    /// Check if this is a bounds-check failure.
    pub fn is_invalid_position(&self) -> bool {
        matches!(self, Error::InvalidPosition { .. })
    }
}

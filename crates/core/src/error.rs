//! Pricing error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the pricing layer.
pub type PricingResult<T> = Result<T, PricingError>;

/// Pricing-level error.
///
/// Missing or malformed prices are *not* errors; they are skipped by the
/// refresh pass. This enum only covers conditions that make a computation
/// undefined.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A chain of required plate slots loops back onto an item already being resolved.
    #[error("cyclic part reference through item {0}")]
    CyclicPartReference(ItemId),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl PricingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn cyclic(item: ItemId) -> Self {
        Self::CyclicPartReference(item)
    }
}

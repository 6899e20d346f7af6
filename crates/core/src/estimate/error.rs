//! Cost estimate error types.

use sitecost_shared::types::LineItemId;
use thiserror::Error;

/// Reasons a line item draft is rejected or an edit cannot apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Name is missing or blank.
    #[error("Line item name is required")]
    MissingName,

    /// Quantity is missing, zero, or negative.
    #[error("Line item quantity must be greater than zero")]
    MissingOrInvalidQuantity,

    /// Unit price is missing.
    #[error("Line item unit price is required")]
    MissingUnitPrice,

    /// Unit price is negative and credits are not allowed.
    #[error("Line item unit price cannot be negative")]
    NegativeUnitPrice,

    /// Quantity times unit price does not fit in a `Decimal`.
    #[error("Line item amount is out of range")]
    AmountOutOfRange,

    /// No line item with this ID exists.
    #[error("Line item not found: {0}")]
    ItemNotFound(LineItemId),
}

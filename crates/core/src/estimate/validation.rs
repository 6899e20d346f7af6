//! Validation of line item drafts.

use rust_decimal::Decimal;
use sitecost_shared::types::LineItemId;

use super::error::EstimateError;
use super::types::{AmountPolicy, LineItem, LineItemDraft};

/// Validates a draft and turns it into a line item with a fresh ID.
///
/// Checks run in form order: name, quantity, unit price. A zero unit price
/// is accepted; a negative one only under [`AmountPolicy::AllowCredits`].
/// The line total must be representable.
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate_draft(
    draft: &LineItemDraft,
    policy: AmountPolicy,
) -> Result<LineItem, EstimateError> {
    let name = draft
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(EstimateError::MissingName)?;

    let quantity = draft
        .quantity
        .filter(|quantity| *quantity > Decimal::ZERO)
        .ok_or(EstimateError::MissingOrInvalidQuantity)?;

    let unit_price = draft.unit_price.ok_or(EstimateError::MissingUnitPrice)?;
    if unit_price < Decimal::ZERO && policy == AmountPolicy::RejectNegative {
        return Err(EstimateError::NegativeUnitPrice);
    }
    if quantity.checked_mul(unit_price).is_none() {
        return Err(EstimateError::AmountOutOfRange);
    }

    Ok(LineItem {
        id: LineItemId::new(),
        name: name.to_string(),
        category: draft.category.unwrap_or_default(),
        quantity,
        unit: draft.unit.unwrap_or_default(),
        unit_price,
    })
}

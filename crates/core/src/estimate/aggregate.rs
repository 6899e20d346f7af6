//! Cost aggregation over a caller-owned list of line items.
//!
//! Every function here is pure: list operations borrow the current items and
//! return a new vector, and totals are recomputed from scratch on each call.
//! Arithmetic saturates at the `Decimal` range instead of panicking.

use rust_decimal::Decimal;
use sitecost_shared::types::LineItemId;

use super::error::EstimateError;
use super::types::{AmountPolicy, CostCategory, LineItem, LineItemDraft};
use super::validation::validate_draft;

/// Appends a validated draft, returning the new list.
///
/// A draft that fails validation under the default policy leaves the list
/// unchanged. The new item's ID is the last element's ID.
#[must_use]
pub fn add_item(items: &[LineItem], draft: &LineItemDraft) -> Vec<LineItem> {
    try_add_item(items, draft, AmountPolicy::default()).unwrap_or_else(|_| items.to_vec())
}

/// Appends a validated draft, reporting why a rejected draft was refused.
///
/// # Errors
///
/// Returns the validation error from [`validate_draft`].
pub fn try_add_item(
    items: &[LineItem],
    draft: &LineItemDraft,
    policy: AmountPolicy,
) -> Result<Vec<LineItem>, EstimateError> {
    let item = validate_draft(draft, policy)?;
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    Ok(next)
}

/// Removes the item with `id`. An unknown ID returns an unchanged copy.
#[must_use]
pub fn remove_item(items: &[LineItem], id: LineItemId) -> Vec<LineItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Cost of a single line: quantity times unit price, unrounded.
#[must_use]
pub fn item_total(item: &LineItem) -> Decimal {
    item.quantity.saturating_mul(item.unit_price)
}

/// Saturating sum of `amounts`.
#[must_use]
pub(crate) fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `numerator / denominator * 100`, clamped to the `Decimal` range.
///
/// The caller guarantees a non-zero denominator.
#[must_use]
pub(crate) fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            if numerator.is_sign_negative() == denominator.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

/// Sum of item totals in `category`; zero when the category is empty.
#[must_use]
pub fn category_total(items: &[LineItem], category: CostCategory) -> Decimal {
    saturating_sum(
        items
            .iter()
            .filter(|item| item.category == category)
            .map(item_total),
    )
}

/// Sum of all item totals; zero for an empty list.
#[must_use]
pub fn grand_total(items: &[LineItem]) -> Decimal {
    saturating_sum(items.iter().map(item_total))
}

/// `budget - grand_total`. Positive means under budget.
#[must_use]
pub fn variance(budget: Decimal, items: &[LineItem]) -> Decimal {
    budget.saturating_sub(grand_total(items))
}

/// Variance as a percentage of the budget; zero when `budget <= 0`.
#[must_use]
pub fn variance_percent(budget: Decimal, items: &[LineItem]) -> Decimal {
    if budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percent_of(variance(budget, items), budget)
}

/// Categories with at least one item, in canonical order.
#[must_use]
pub fn categories_in_use(items: &[LineItem]) -> Vec<CostCategory> {
    CostCategory::ALL
        .into_iter()
        .filter(|category| items.iter().any(|item| item.category == *category))
        .collect()
}

//! Single-owner container for an estimate being edited.

use rust_decimal::Decimal;
use sitecost_shared::types::{EstimateId, LineItemId};

use super::error::EstimateError;
use super::summary::EstimateSummary;
use super::types::{AmountPolicy, LineItem, LineItemDraft};
use super::validation::validate_draft;

/// An estimate's budget and line items, mutated through `&mut self` only.
#[derive(Debug, Clone)]
pub struct CostSheet {
    id: EstimateId,
    budget: Decimal,
    policy: AmountPolicy,
    items: Vec<LineItem>,
}

impl CostSheet {
    /// Creates an empty sheet with the default amount policy.
    #[must_use]
    pub fn new(budget: Decimal) -> Self {
        Self::with_policy(budget, AmountPolicy::default())
    }

    /// Creates an empty sheet with an explicit amount policy.
    #[must_use]
    pub fn with_policy(budget: Decimal, policy: AmountPolicy) -> Self {
        Self {
            id: EstimateId::new(),
            budget,
            policy,
            items: Vec::new(),
        }
    }

    /// Estimate ID.
    #[must_use]
    pub const fn id(&self) -> EstimateId {
        self.id
    }

    /// Project budget.
    #[must_use]
    pub const fn budget(&self) -> Decimal {
        self.budget
    }

    /// Replaces the project budget.
    pub fn set_budget(&mut self, budget: Decimal) {
        self.budget = budget;
    }

    /// Amount policy applied on add.
    #[must_use]
    pub const fn policy(&self) -> AmountPolicy {
        self.policy
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates and appends a draft, returning the new item's ID.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the sheet is left unchanged.
    pub fn add(&mut self, draft: &LineItemDraft) -> Result<LineItemId, EstimateError> {
        let item = validate_draft(draft, self.policy)?;
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Removes the item with `id`, returning whether one was removed.
    pub fn remove(&mut self, id: LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Edits an item by removing it and appending the draft under a new ID.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for an unknown ID, or the validation error.
    /// In both cases the sheet is left unchanged.
    pub fn replace(
        &mut self,
        id: LineItemId,
        draft: &LineItemDraft,
    ) -> Result<LineItemId, EstimateError> {
        if !self.items.iter().any(|item| item.id == id) {
            return Err(EstimateError::ItemNotFound(id));
        }
        let item = validate_draft(draft, self.policy)?;
        let new_id = item.id;
        self.items.retain(|existing| existing.id != id);
        self.items.push(item);
        Ok(new_id)
    }

    /// Recomputes all derived figures.
    #[must_use]
    pub fn summary(&self) -> EstimateSummary {
        EstimateSummary::compute(self.budget, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::types::{CostCategory, Unit};
    use rust_decimal_macros::dec;

    fn wire() -> LineItemDraft {
        LineItemDraft::new("Wire", CostCategory::Electrical, dec!(10), Unit::Metres, dec!(600))
    }

    #[test]
    fn test_add_and_summary() {
        let mut sheet = CostSheet::new(dec!(5000));
        sheet.add(&wire()).unwrap();

        let summary = sheet.summary();
        assert_eq!(summary.grand_total, dec!(6000));
        assert_eq!(summary.variance, dec!(-1000));
        assert_eq!(summary.variance_percent, dec!(-20));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_rejected_add_leaves_sheet_unchanged() {
        let mut sheet = CostSheet::new(dec!(5000));
        let draft = LineItemDraft {
            quantity: None,
            ..wire()
        };
        assert_eq!(sheet.add(&draft), Err(EstimateError::MissingOrInvalidQuantity));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_policy_controls_credits() {
        let credit = LineItemDraft::new(
            "Rebate",
            CostCategory::Other,
            dec!(1),
            Unit::Pieces,
            dec!(-200),
        );

        let mut strict = CostSheet::new(dec!(1000));
        assert_eq!(strict.add(&credit), Err(EstimateError::NegativeUnitPrice));

        let mut lenient = CostSheet::with_policy(dec!(1000), AmountPolicy::AllowCredits);
        lenient.add(&wire()).unwrap();
        lenient.add(&credit).unwrap();
        assert_eq!(lenient.summary().grand_total, dec!(5800));
    }

    #[test]
    fn test_remove() {
        let mut sheet = CostSheet::new(dec!(5000));
        let id = sheet.add(&wire()).unwrap();

        assert!(!sheet.remove(LineItemId::new()));
        assert_eq!(sheet.len(), 1);
        assert!(sheet.remove(id));
        assert!(sheet.is_empty());
        assert!(!sheet.remove(id));
    }

    #[test]
    fn test_replace_is_remove_then_add() {
        let mut sheet = CostSheet::new(dec!(5000));
        let first = sheet.add(&wire()).unwrap();
        sheet
            .add(&LineItemDraft::new(
                "Pipe",
                CostCategory::Plumbing,
                dec!(4),
                Unit::Metres,
                dec!(25),
            ))
            .unwrap();

        let edited = LineItemDraft {
            quantity: Some(dec!(5)),
            ..wire()
        };
        let new_id = sheet.replace(first, &edited).unwrap();

        assert_ne!(new_id, first);
        assert_eq!(sheet.items().last().map(|item| item.id), Some(new_id));
        assert_eq!(sheet.items()[0].name, "Pipe");
        assert_eq!(sheet.summary().grand_total, dec!(3100));
    }

    #[test]
    fn test_replace_failures_leave_sheet_unchanged() {
        let mut sheet = CostSheet::new(dec!(5000));
        let id = sheet.add(&wire()).unwrap();
        let before = sheet.items().to_vec();

        let missing = LineItemId::new();
        assert_eq!(
            sheet.replace(missing, &wire()),
            Err(EstimateError::ItemNotFound(missing))
        );
        assert_eq!(
            sheet.replace(id, &LineItemDraft::default()),
            Err(EstimateError::MissingName)
        );
        assert_eq!(sheet.items(), before.as_slice());
    }

    #[test]
    fn test_set_budget_recomputes() {
        let mut sheet = CostSheet::new(dec!(5000));
        sheet.add(&wire()).unwrap();
        sheet.set_budget(dec!(12000));

        let summary = sheet.summary();
        assert_eq!(summary.variance, dec!(6000));
        assert_eq!(summary.variance_percent, dec!(50));
    }
}

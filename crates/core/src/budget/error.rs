//! Budget error types.

use thiserror::Error;

use crate::estimate::CostCategory;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Budgeted amount cannot be negative.
    #[error("Budgeted amount for {0} cannot be negative")]
    NegativeAmount(CostCategory),

    /// A category was budgeted more than once.
    #[error("Category {0} is budgeted more than once")]
    DuplicateCategory(CostCategory),
}

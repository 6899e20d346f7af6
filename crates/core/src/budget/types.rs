//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimate::CostCategory;

/// Budgeted amount for one cost category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Category.
    pub category: CostCategory,
    /// Budgeted amount.
    pub budgeted: Decimal,
}

/// Budget line with calculated actual amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineWithActual {
    /// Category.
    pub category: CostCategory,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount from the estimate's line items.
    pub actual: Decimal,
    /// Variance (budgeted - actual).
    pub variance: Decimal,
    /// Variance percentage.
    pub variance_percent: Decimal,
    /// Utilization percentage (actual / budgeted * 100).
    pub utilization_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Budget vs actual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVsActualReport {
    /// One line per budgeted category, canonical order.
    pub lines: Vec<BudgetLineWithActual>,
    /// Summary totals.
    pub summary: BudgetVsActualSummary,
}

/// Budget vs actual summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVsActualSummary {
    /// Total budgeted amount.
    pub total_budgeted: Decimal,
    /// Total actual amount in budgeted categories.
    pub total_actual: Decimal,
    /// Total variance.
    pub total_variance: Decimal,
    /// Overall utilization percentage.
    pub overall_utilization: Decimal,
    /// Spend in categories that have no budget line.
    pub unbudgeted_actual: Decimal,
}

/// Variance calculation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceResult {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Variance amount.
    pub variance: Decimal,
    /// Variance percentage.
    pub variance_percent: Decimal,
    /// Utilization percentage.
    pub utilization_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Spend is under budget.
    Favorable,
    /// Spend is over budget.
    Unfavorable,
    /// Spend equals budget.
    OnBudget,
}

impl VarianceStatus {
    /// Classifies a `budget - actual` variance.
    #[must_use]
    pub fn from_variance(variance: Decimal) -> Self {
        match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Favorable,
            std::cmp::Ordering::Less => Self::Unfavorable,
            std::cmp::Ordering::Equal => Self::OnBudget,
        }
    }
}

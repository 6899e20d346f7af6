//! Budget service for variance calculation and validation.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::{
    BudgetLineWithActual, BudgetVsActualReport, BudgetVsActualSummary, CategoryBudget,
    VarianceResult, VarianceStatus,
};
use crate::estimate::aggregate::{percent_of, saturating_sum};
use crate::estimate::{LineItem, category_total, grand_total};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Calculate variance between budgeted and actual amounts.
    ///
    /// variance = budgeted - actual
    ///   - Positive variance (under budget) is favorable
    ///   - Negative variance (over budget) is unfavorable
    ///
    /// Percentages are rounded to 2 decimal places and are zero when nothing
    /// was budgeted. Results outside the `Decimal` range saturate.
    #[must_use]
    pub fn calculate_variance(budgeted: Decimal, actual: Decimal) -> VarianceResult {
        let variance = budgeted.saturating_sub(actual);

        let variance_percent = if budgeted.is_zero() {
            Decimal::ZERO
        } else {
            percent_of(variance, budgeted).round_dp(2)
        };

        let utilization_percent = if budgeted.is_zero() {
            Decimal::ZERO
        } else {
            percent_of(actual, budgeted).round_dp(2)
        };

        VarianceResult {
            budgeted,
            actual,
            variance,
            variance_percent,
            utilization_percent,
            status: VarianceStatus::from_variance(variance),
        }
    }

    /// Validate a set of category budgets.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeAmount` if an amount is negative.
    /// Returns `BudgetError::DuplicateCategory` if a category appears twice.
    pub fn validate_budgets(budgets: &[CategoryBudget]) -> Result<(), BudgetError> {
        let mut seen = HashSet::with_capacity(budgets.len());
        for budget in budgets {
            if budget.budgeted < Decimal::ZERO {
                return Err(BudgetError::NegativeAmount(budget.category));
            }
            if !seen.insert(budget.category) {
                return Err(BudgetError::DuplicateCategory(budget.category));
            }
        }
        Ok(())
    }

    /// Compares each category budget with the estimate's spend in that category.
    ///
    /// # Errors
    ///
    /// Returns an error if the budgets fail [`Self::validate_budgets`].
    pub fn budget_vs_actual(
        budgets: &[CategoryBudget],
        items: &[LineItem],
    ) -> Result<BudgetVsActualReport, BudgetError> {
        Self::validate_budgets(budgets)?;

        let mut ordered = budgets.to_vec();
        ordered.sort_by_key(|budget| budget.category);

        let lines: Vec<BudgetLineWithActual> = ordered
            .iter()
            .map(|budget| {
                let actual = category_total(items, budget.category);
                let result = Self::calculate_variance(budget.budgeted, actual);
                BudgetLineWithActual {
                    category: budget.category,
                    budgeted: result.budgeted,
                    actual: result.actual,
                    variance: result.variance,
                    variance_percent: result.variance_percent,
                    utilization_percent: result.utilization_percent,
                    status: result.status,
                }
            })
            .collect();

        let total_budgeted = saturating_sum(lines.iter().map(|line| line.budgeted));
        let total_actual = saturating_sum(lines.iter().map(|line| line.actual));
        let overall = Self::calculate_variance(total_budgeted, total_actual);

        Ok(BudgetVsActualReport {
            lines,
            summary: BudgetVsActualSummary {
                total_budgeted,
                total_actual,
                total_variance: overall.variance,
                overall_utilization: overall.utilization_percent,
                unbudgeted_actual: grand_total(items).saturating_sub(total_actual),
            },
        })
    }
}

//! Plain-text rendering of an estimate summary.

use std::fmt;

use rust_decimal::Decimal;
use sitecost_core::budget::{BudgetVsActualReport, VarianceStatus};
use sitecost_core::estimate::{EstimateSummary, item_total};
use sitecost_shared::types::{Currency, Money};

const LABEL_WIDTH: usize = 24;

/// Text report: the summary cards, the category breakdown and, when present,
/// the budget vs actual table.
pub struct Report<'a> {
    /// Estimate totals.
    pub summary: &'a EstimateSummary,
    /// Per-category budget comparison.
    pub budget_report: Option<&'a BudgetVsActualReport>,
    /// Display currency.
    pub currency: Currency,
}

impl Report<'_> {
    fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }

    fn write_breakdown(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        if summary.categories.is_empty() {
            return writeln!(f, "No items added yet");
        }

        writeln!(f, "Cost Breakdown")?;
        for group in &summary.categories {
            writeln!(
                f,
                "{:<48}{:>16}",
                group.category,
                self.money(group.total).to_string()
            )?;
            for item in &group.items {
                writeln!(
                    f,
                    "  {:<28}{:>14}{:>16}{:>16}",
                    item.name,
                    format!("{} {}", item.quantity.normalize(), item.unit),
                    self.money(item.unit_price).to_string(),
                    self.money(item_total(item)).to_string()
                )?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<48}{:>16}",
            "Grand Total",
            self.money(summary.grand_total).to_string()
        )
    }

    fn write_budget_table(
        &self,
        f: &mut fmt::Formatter<'_>,
        report: &BudgetVsActualReport,
    ) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Budget vs Actual")?;
        writeln!(
            f,
            "{:<24}{:>16}{:>16}{:>17}{:>10}",
            "Category", "Budgeted", "Actual", "Variance", "Used"
        )?;
        for line in &report.lines {
            writeln!(
                f,
                "{:<24}{:>16}{:>16}{:>17}{:>9.2}%",
                line.category,
                self.money(line.budgeted).to_string(),
                self.money(line.actual).to_string(),
                signed(line.variance, line.status, self.currency),
                line.utilization_percent
            )?;
        }

        let summary = &report.summary;
        writeln!(
            f,
            "{:<24}{:>16}{:>16}{:>17}{:>9.2}%",
            "Total",
            self.money(summary.total_budgeted).to_string(),
            self.money(summary.total_actual).to_string(),
            signed(
                summary.total_variance,
                VarianceStatus::from_variance(summary.total_variance),
                self.currency
            ),
            summary.overall_utilization
        )?;
        if !summary.unbudgeted_actual.is_zero() {
            writeln!(
                f,
                "{:<24}{:>32}",
                "Unbudgeted spend",
                self.money(summary.unbudgeted_actual).to_string()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "Cost Estimate (ROM)")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Project Budget",
            self.money(summary.budget)
        )?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Estimated Cost",
            self.money(summary.grand_total)
        )?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{} ({} by {:.1}%)",
            "Variance",
            self.money(summary.variance.abs()),
            if summary.is_over_budget() { "Over" } else { "Under" },
            summary.variance_percent.abs().round_dp(1)
        )?;
        writeln!(f)?;

        self.write_breakdown(f)?;
        if let Some(report) = self.budget_report {
            self.write_budget_table(f, report)?;
        }
        Ok(())
    }
}

/// Variance with an explicit sign: `+$3,000.00`, `-$7,000.00`, `$0.00`.
fn signed(variance: Decimal, status: VarianceStatus, currency: Currency) -> String {
    let amount = Money::new(variance, currency).abs();
    match status {
        VarianceStatus::Favorable => format!("+{amount}"),
        VarianceStatus::Unfavorable => format!("-{amount}"),
        VarianceStatus::OnBudget => amount.to_string(),
    }
}

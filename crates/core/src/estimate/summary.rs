//! Derived estimate figures for display.

use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregate::{categories_in_use, category_total, grand_total, variance, variance_percent};
use super::types::{CostCategory, LineItem};
use crate::budget::VarianceStatus;

/// Items of one category with their subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    /// Category.
    pub category: CostCategory,
    /// Sum of the item totals below.
    pub total: Decimal,
    /// Items in insertion order.
    pub items: Vec<LineItem>,
}

/// Everything the cost calculator shows, recomputed from a list and a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateSummary {
    /// Project budget.
    pub budget: Decimal,
    /// Estimated cost.
    pub grand_total: Decimal,
    /// Budget minus estimated cost.
    pub variance: Decimal,
    /// Variance as a percentage of the budget, unrounded.
    pub variance_percent: Decimal,
    /// Under, over, or on budget.
    pub status: VarianceStatus,
    /// Categories in use, canonical order.
    pub categories: Vec<CategoryBreakdown>,
}

impl EstimateSummary {
    /// Computes the summary for `items` against `budget`.
    #[must_use]
    pub fn compute(budget: Decimal, items: &[LineItem]) -> Self {
        let categories = categories_in_use(items)
            .into_iter()
            .map(|category| CategoryBreakdown {
                category,
                total: category_total(items, category),
                items: items
                    .iter()
                    .filter(|item| item.category == category)
                    .cloned()
                    .collect(),
            })
            .collect();

        let variance = variance(budget, items);

        Self {
            budget,
            grand_total: grand_total(items),
            variance,
            variance_percent: variance_percent(budget, items),
            status: VarianceStatus::from_variance(variance),
            categories,
        }
    }

    /// True when the estimated cost exceeds the budget.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.variance < Decimal::ZERO
    }

    /// Total number of line items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|group| group.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::aggregate::add_item;
    use crate::estimate::types::{LineItemDraft, Unit};
    use rust_decimal_macros::dec;

    fn sample_items() -> Vec<LineItem> {
        let drafts = [
            LineItemDraft::new("Shingles", CostCategory::Roofing, dec!(20), Unit::Boxes, dec!(45)),
            LineItemDraft::new(
                "Gravel",
                CostCategory::FoundationSitework,
                dec!(3),
                Unit::Tons,
                dec!(80),
            ),
            LineItemDraft::new(
                "Flashing",
                CostCategory::Roofing,
                dec!(12),
                Unit::Metres,
                dec!(9.5),
            ),
        ];
        drafts.iter().fold(Vec::new(), |items, draft| add_item(&items, draft))
    }

    #[test]
    fn test_breakdown_groups_in_canonical_order() {
        let summary = EstimateSummary::compute(dec!(2000), &sample_items());

        let order: Vec<CostCategory> = summary.categories.iter().map(|g| g.category).collect();
        assert_eq!(order, vec![CostCategory::FoundationSitework, CostCategory::Roofing]);

        let roofing = &summary.categories[1];
        assert_eq!(roofing.total, dec!(1014));
        let names: Vec<&str> = roofing.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Shingles", "Flashing"]);
        assert_eq!(summary.item_count(), 3);
    }

    #[test]
    fn test_under_budget_summary() {
        let summary = EstimateSummary::compute(dec!(2000), &sample_items());

        assert_eq!(summary.grand_total, dec!(1254));
        assert_eq!(summary.variance, dec!(746));
        assert_eq!(summary.variance_percent, dec!(37.3));
        assert_eq!(summary.status, VarianceStatus::Favorable);
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_over_budget_summary() {
        let summary = EstimateSummary::compute(dec!(1000), &sample_items());

        assert_eq!(summary.variance, dec!(-254));
        assert_eq!(summary.status, VarianceStatus::Unfavorable);
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_empty_summary() {
        let summary = EstimateSummary::compute(Decimal::ZERO, &[]);

        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert_eq!(summary.variance_percent, Decimal::ZERO);
        assert_eq!(summary.status, VarianceStatus::OnBudget);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_summary_serializes_category_labels() {
        let summary = EstimateSummary::compute(dec!(2000), &sample_items());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["categories"][0]["category"], "Foundation & Sitework");
        assert_eq!(json["status"], "favorable");
    }
}

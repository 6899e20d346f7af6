//! Estimate file loading.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use sitecost_core::budget::CategoryBudget;
use sitecost_core::estimate::{AmountPolicy, CostSheet, LineItemDraft};
use sitecost_shared::types::Currency;
use sitecost_shared::{AppError, AppResult};
use tracing::{debug, warn};

/// Contents of an estimate JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateFile {
    /// Project budget.
    pub budget: Decimal,
    /// Display currency; falls back to the configured one.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Line item drafts in entry order.
    #[serde(default)]
    pub items: Vec<LineItemDraft>,
    /// Optional per-category budgets.
    #[serde(default)]
    pub category_budgets: Vec<CategoryBudget>,
}

impl EstimateFile {
    /// Reads and parses an estimate file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "Read estimate file");
        Self::parse(&raw)
    }

    /// Parses estimate JSON.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let file: Self = serde_json::from_str(raw)?;
        if file.budget < Decimal::ZERO {
            return Err(AppError::Validation(
                "budget cannot be negative".to_string(),
            ));
        }
        Ok(file)
    }

    /// Adds every draft to a new sheet, skipping the ones that fail validation.
    ///
    /// Returns the sheet and the number of skipped drafts.
    pub fn fill_sheet(&self, policy: AmountPolicy) -> (CostSheet, usize) {
        let mut sheet = CostSheet::with_policy(self.budget, policy);
        let mut skipped = 0;

        for (index, draft) in self.items.iter().enumerate() {
            match sheet.add(draft) {
                Ok(id) => {
                    debug!(estimate_id = %sheet.id(), item_id = %id, index, "Added line item");
                }
                Err(err) => {
                    skipped += 1;
                    warn!(
                        estimate_id = %sheet.id(),
                        index,
                        name = draft.name.as_deref().unwrap_or_default(),
                        error = %err,
                        "Skipping line item"
                    );
                }
            }
        }

        (sheet, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sitecost_core::estimate::CostCategory;

    const SAMPLE: &str = r#"{
        "budget": 10000,
        "items": [
            {
                "name": "Footing", "category": "Foundation & Sitework",
                "quantity": 2, "unit": "m³", "unit_price": 1500
            },
            { "name": "Trusses", "category": "Roofing", "quantity": 1, "unitPrice": "3000" },
            { "name": "", "category": "Roofing", "quantity": 1, "unit_price": 10 },
            { "name": "Rebate", "category": "Other", "quantity": 1, "unit_price": -500 }
        ],
        "category_budgets": [
            { "category": "Roofing", "budgeted": 2500 }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let file = EstimateFile::parse(SAMPLE).unwrap();
        assert_eq!(file.budget, dec!(10000));
        assert_eq!(file.currency, None);
        assert_eq!(file.items.len(), 4);
        assert_eq!(file.category_budgets[0].category, CostCategory::Roofing);
    }

    #[test]
    fn test_fill_sheet_skips_invalid_drafts() {
        let file = EstimateFile::parse(SAMPLE).unwrap();

        let (sheet, skipped) = file.fill_sheet(AmountPolicy::RejectNegative);
        assert_eq!(skipped, 2);
        assert_eq!(sheet.summary().grand_total, dec!(6000));

        let (sheet, skipped) = file.fill_sheet(AmountPolicy::AllowCredits);
        assert_eq!(skipped, 1);
        assert_eq!(sheet.summary().grand_total, dec!(5500));
    }

    #[test]
    fn test_parse_minimal() {
        let file = EstimateFile::parse(r#"{"budget": "0", "currency": "IDR"}"#).unwrap();
        assert!(file.items.is_empty());
        assert!(file.category_budgets.is_empty());
        assert_eq!(file.currency, Some(Currency::Idr));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = EstimateFile::parse(r#"{"budget": -1}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = EstimateFile::parse(r#"{"budget": }"#).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let raw = r#"{"budget": 1, "items": [{"name": "x", "category": "Landscaping"}]}"#;
        assert!(EstimateFile::parse(raw).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = EstimateFile::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_out_of_range_amount_is_skipped() {
        let raw = r#"{
            "budget": 1000,
            "items": [
                {
                    "name": "Tower",
                    "quantity": 100000000000000000000,
                    "unit_price": 100000000000000000000
                },
                { "name": "Gravel", "quantity": 1, "unit_price": 400 }
            ]
        }"#;
        let file = EstimateFile::parse(raw).unwrap();

        let (sheet, skipped) = file.fill_sheet(AmountPolicy::RejectNegative);
        assert_eq!(skipped, 1);
        assert_eq!(sheet.summary().grand_total, dec!(400));
    }

    #[test]
    fn test_tiny_budget_summary_does_not_overflow() {
        let raw = r#"{
            "budget": "0.0000000000000000000000000001",
            "items": [
                { "name": "Tower", "quantity": 1, "unit_price": "10000000000000000000000000" }
            ]
        }"#;
        let file = EstimateFile::parse(raw).unwrap();

        let (sheet, skipped) = file.fill_sheet(AmountPolicy::RejectNegative);
        let summary = sheet.summary();
        assert_eq!(skipped, 0);
        assert_eq!(summary.variance_percent, Decimal::MIN);
        assert!(summary.is_over_budget());
    }
}

//! Per-category budget vs actual comparison.

pub mod error;
pub mod service;
pub mod types;


pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{
    BudgetLineWithActual, BudgetVsActualReport, BudgetVsActualSummary, CategoryBudget,
    VarianceResult, VarianceStatus,
};

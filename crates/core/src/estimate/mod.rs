//! Cost estimation: line items, category subtotals, and budget variance.

pub mod aggregate;
pub mod error;
pub mod sheet;
pub mod summary;
pub mod types;
pub mod validation;


pub use aggregate::{
    add_item, categories_in_use, category_total, grand_total, item_total, remove_item,
    try_add_item, variance, variance_percent,
};
pub use error::EstimateError;
pub use sheet::CostSheet;
pub use summary::{CategoryBreakdown, EstimateSummary};
pub use types::{AmountPolicy, CostCategory, LineItem, LineItemDraft, Unit};
pub use validation::validate_draft;

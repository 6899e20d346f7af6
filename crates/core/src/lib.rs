//! Core cost estimation logic for Sitecost.
//!
//! This crate contains pure business logic with ZERO filesystem, network, or
//! logging dependencies. Domain types, validation rules, and calculations
//! live here.
//!
//! # Modules
//!
//! - `estimate` - Line items, category subtotals, and budget variance
//! - `budget` - Per-category budget vs actual comparison

pub mod budget;
pub mod estimate;

//! Sitecost estimator.
//!
//! Reads an estimate file, recomputes the cost breakdown and budget variance,
//! and prints the result.
//!
//! Usage: cargo run --bin estimator -- <estimate.json>

mod input;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use sitecost_core::budget::BudgetService;
use sitecost_core::estimate::AmountPolicy;
use sitecost_shared::{AppConfig, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::EstimateFile;
use crate::render::Report;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return exit_code(AppError::from(err).exit_code());
        }
    };

    // Initialize tracing; logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            let error_code = err
                .downcast_ref::<AppError>()
                .map_or("ERROR", AppError::error_code);
            error!(error_code, "{err:#}");
            exit_code(code)
        }
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Validation("usage: estimator <estimate.json>".to_string()))?;

    let file = EstimateFile::load(&path)
        .with_context(|| format!("Failed to load estimate {}", path.display()))?;
    let currency = file.currency.unwrap_or(config.estimate.currency);
    let policy = AmountPolicy::from_allow_credits(config.estimate.allow_credits);

    let (sheet, skipped) = file.fill_sheet(policy);
    let summary = sheet.summary();
    info!(
        estimate_id = %sheet.id(),
        items = sheet.len(),
        skipped,
        policy = ?sheet.policy(),
        grand_total = %summary.grand_total,
        variance = %summary.variance,
        status = ?summary.status,
        "Estimate computed"
    );

    let budget_report = if file.category_budgets.is_empty() {
        None
    } else {
        Some(BudgetService::budget_vs_actual(
            &file.category_budgets,
            sheet.items(),
        )?)
    };

    print!(
        "{}",
        Report {
            summary: &summary,
            budget_report: budget_report.as_ref(),
            currency,
        }
    );
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

//! CLI command implementations

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod summary;
pub mod total;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use expense_tracker_rs::{CsvStore, ExpenseFilter, LedgerPaths, ReportExporter};

/// Filter flags shared by `list` and `export`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Category (case-insensitive exact match)
    #[arg(long)]
    pub category: Option<String>,
    /// Start date, YYYY-MM-DD inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date, YYYY-MM-DD inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Substring to search across every field
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Result<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();
        if let Some(category) = &self.category {
            filter = filter.category(category);
        }
        if let Some(from) = &self.from {
            filter = filter.start_date(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.end_date(parse_date(to)?);
        }
        if let Some(search) = &self.search {
            filter = filter.text(search);
        }
        Ok(filter)
    }
}

/// Store and exporter wired to the configured data directory
pub struct LedgerContext {
    pub store: CsvStore,
    pub exporter: ReportExporter,
}

/// Resolve paths from the environment, bootstrap the data layout, and
/// open the store
pub fn get_context() -> Result<LedgerContext> {
    let paths = LedgerPaths::from_env();
    paths
        .ensure()
        .with_context(|| format!("failed to create data directory {:?}", paths.data_dir()))?;

    let store = CsvStore::new(paths.ledger_file());
    store.ensure_initialized()?;

    Ok(LedgerContext {
        store,
        exporter: ReportExporter::new(paths.reports_dir()),
    })
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date {s:?}, use YYYY-MM-DD"))
}

/// Parse an amount, tolerating a decimal comma, rounded to two decimals
pub fn parse_amount(s: &str) -> Result<Decimal> {
    s.trim()
        .replace(',', ".")
        .parse::<Decimal>()
        .map(|d| d.round_dp(2))
        .map_err(|_| anyhow::anyhow!("amount must be a number, e.g. 12.50"))
}

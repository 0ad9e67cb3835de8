//! Summary command - totals grouped by category, date, or month

use anyhow::Result;
use clap::ValueEnum;

use expense_tracker_rs::{SummaryKey, group_and_sum};

use super::get_context;
use crate::output;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SummaryArg {
    Category,
    Date,
    Month,
}

impl From<SummaryArg> for SummaryKey {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Category => SummaryKey::Category,
            SummaryArg::Date => SummaryKey::Date,
            SummaryArg::Month => SummaryKey::Month,
        }
    }
}

pub fn run(key: SummaryArg) -> Result<()> {
    let ctx = get_context()?;
    let expenses = ctx.store.load_all()?;
    if expenses.is_empty() {
        println!("No expenses yet.");
        return Ok(());
    }

    let key = SummaryKey::from(key);
    let label = match key {
        SummaryKey::Category => "Category",
        SummaryKey::Date => "Date",
        SummaryKey::Month => "Month (YYYY-MM)",
    };

    println!("{}", output::totals_table(label, &group_and_sum(&expenses, key)));
    Ok(())
}

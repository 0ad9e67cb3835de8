//! List command - show expenses with their ledger indices

use anyhow::Result;

use expense_tracker_rs::Expense;

use super::{FilterArgs, get_context};
use crate::output;

pub fn run(filters: &FilterArgs) -> Result<()> {
    let ctx = get_context()?;
    let expenses = ctx.store.load_all()?;
    if expenses.is_empty() {
        println!("No expenses yet.");
        return Ok(());
    }

    // Indices must survive filtering so they stay valid for edit/delete,
    // so enumerate before applying the predicate
    let filter = filters.to_filter()?;
    let rows: Vec<(usize, &Expense)> = expenses
        .iter()
        .enumerate()
        .filter(|(_, expense)| filter.matches(expense))
        .collect();

    if rows.is_empty() {
        println!("No matching expenses.");
        return Ok(());
    }

    println!("{}", output::expense_table(&rows));
    Ok(())
}

//! Total command - grand total across the whole ledger

use anyhow::Result;

use expense_tracker_rs::grand_total;

use super::get_context;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let expenses = ctx.store.load_all()?;
    if expenses.is_empty() {
        println!("No expenses yet.");
        return Ok(());
    }

    println!("Overall total = {:.2}", grand_total(&expenses).round_dp(2));
    Ok(())
}

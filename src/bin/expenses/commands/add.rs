//! Add command - append one expense to the ledger

use anyhow::Result;
use chrono::Local;
use dialoguer::Input;

use expense_tracker_rs::{DEFAULT_CATEGORY, Expense};

use super::{get_context, parse_amount, parse_date};
use crate::output;

pub fn run(
    date: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let ctx = get_context()?;

    // Each field falls back to an interactive prompt when the flag is
    // omitted
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => {
            let raw: String = Input::new()
                .with_prompt("Date (YYYY-MM-DD)")
                .default(Local::now().date_naive().to_string())
                .interact_text()?;
            parse_date(&raw)?
        }
    };

    let amount = match amount {
        Some(a) => parse_amount(&a)?,
        None => {
            let raw: String = Input::new().with_prompt("Amount").interact_text()?;
            parse_amount(&raw)?
        }
    };

    let category = match category {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Category (e.g. Food, Transport)")
            .default(DEFAULT_CATEGORY.to_string())
            .interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?,
    };

    ctx.store
        .append(Expense::new(date, amount, &category, &description))?;
    output::success("Saved.");

    Ok(())
}

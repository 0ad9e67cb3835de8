//! Edit command - rewrite one entry in place

use anyhow::{Result, bail};
use dialoguer::Input;

use expense_tracker_rs::Expense;

use super::{get_context, parse_amount, parse_date};
use crate::output;

pub fn run(
    index: usize,
    date: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let ctx = get_context()?;
    let expenses = ctx.store.load_all()?;

    let Some(current) = expenses.get(index) else {
        bail!("index {index} is out of range for {} entries", expenses.len());
    };

    // Prompts default to the current field values, so hitting enter
    // keeps a field unchanged
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => {
            let raw: String = Input::new()
                .with_prompt("Date (YYYY-MM-DD)")
                .default(current.date.to_string())
                .interact_text()?;
            parse_date(&raw)?
        }
    };

    let amount = match amount {
        Some(a) => parse_amount(&a)?,
        None => {
            let raw: String = Input::new()
                .with_prompt("Amount")
                .default(output::format_money(&current.amount))
                .interact_text()?;
            parse_amount(&raw)?
        }
    };

    let category = match category {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Category")
            .default(current.category.clone())
            .interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .default(current.description.clone())
            .allow_empty(true)
            .interact_text()?,
    };

    ctx.store
        .update_at(index, Expense::new(date, amount, &category, &description))?;
    output::success("Updated.");

    Ok(())
}

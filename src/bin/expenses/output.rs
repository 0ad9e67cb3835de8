//! Output formatting utilities

use std::collections::BTreeMap;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use rust_decimal::Decimal;

use expense_tracker_rs::{Amount, Expense, HEADERS};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Render an amount with two decimals where possible, verbatim otherwise
pub fn format_money(amount: &Amount) -> String {
    match amount.parse() {
        Some(value) => format!("{:.2}", value.round_dp(2)),
        None => amount.as_str().to_string(),
    }
}

fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Indexed expense table; indices are positions in the full ledger,
/// valid for `edit` and `delete` until the next mutation
pub fn expense_table(rows: &[(usize, &Expense)]) -> Table {
    let mut table = create_table();
    let mut header = vec!["#".to_string()];
    header.extend(HEADERS.iter().map(|h| h.to_string()));
    table.set_header(header);

    for (index, expense) in rows {
        table.add_row(vec![
            index.to_string(),
            expense.date.to_string(),
            format_money(&expense.amount),
            expense.category.clone(),
            expense.description.clone(),
        ]);
    }
    table
}

/// Two-column key/total table for summaries
pub fn totals_table(label: &str, totals: &BTreeMap<String, Decimal>) -> Table {
    let mut table = create_table();
    table.set_header(vec![label, "Total"]);
    for (key, total) in totals {
        table.add_row(vec![key.clone(), format!("{:.2}", total.round_dp(2))]);
    }
    table
}

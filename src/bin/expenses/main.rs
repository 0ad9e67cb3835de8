//! Expense tracker CLI

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{FilterArgs, add, delete, edit, export, list, summary, total};

/// Track personal expenses in a CSV ledger
#[derive(Parser)]
#[command(name = "expenses", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Amount, e.g. 12.50 (decimal comma accepted)
        #[arg(long)]
        amount: Option<String>,
        /// Category, defaults to General
        #[arg(long)]
        category: Option<String>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses with their indices, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Total amounts grouped by category, date, or month
    Summary {
        /// Grouping key
        #[arg(value_enum)]
        key: summary::SummaryArg,
    },

    /// Grand total across all expenses
    Total,

    /// Edit an entry by its index
    Edit {
        /// Index as shown by `list`
        index: usize,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an entry by index, or the most recent one
    Delete {
        /// Index as shown by `list`
        index: Option<usize>,
        /// Delete the most recent entry instead
        #[arg(long, conflicts_with = "index")]
        last: bool,
    },

    /// Export filtered rows to a timestamped report file
    Export {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add {
            date,
            amount,
            category,
            description,
        } => add::run(date, amount, category, description),
        Commands::List { filters } => list::run(&filters),
        Commands::Summary { key } => summary::run(key),
        Commands::Total => total::run(),
        Commands::Edit {
            index,
            date,
            amount,
            category,
            description,
        } => edit::run(index, date, amount, category, description),
        Commands::Delete { index, last } => delete::run(index, last),
        Commands::Export { filters } => export::run(&filters),
    }
}

//! Personal expense ledger backed by a delimited text file.
//!
//! ```rust,ignore
//! use expense_tracker_rs::{CsvStore, ExpenseFilter};
//!
//! let store = CsvStore::new("data/expenses.csv");
//! let food = ExpenseFilter::new()
//!     .category("Food")
//!     .apply(&store.load_all()?);
//! ```

mod types;

pub mod errors;
pub mod export;
pub mod filter;
pub mod paths;
pub mod store;
pub mod summary;

pub use errors::{LedgerError, LedgerResult};
pub use export::ReportExporter;
pub use filter::ExpenseFilter;
pub use paths::LedgerPaths;
pub use store::{CsvStore, HEADERS};
pub use summary::{SummaryKey, grand_total, group_and_sum};
pub use types::{Amount, DEFAULT_CATEGORY, Expense};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{LedgerError, LedgerResult};
use crate::types::{Amount, Expense};

/// Column header written as the first line of every ledger file.
pub const HEADERS: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// On-disk row shape. Cells stay untyped strings here; the conversion
/// into [`Expense`] is where the date must parse.
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = LedgerError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").map_err(|_| {
            LedgerError::MalformedRow(format!("invalid date cell: {:?}", row.date))
        })?;

        // The amount cell is kept verbatim; corrupt cells are the
        // aggregation layer's problem, not the store's.
        Ok(Expense {
            date,
            amount: Amount::from(row.amount),
            category: row.category,
            description: row.description,
        })
    }
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            amount: expense.amount.as_str().to_string(),
            category: expense.category.clone(),
            description: expense.description.clone(),
        }
    }
}

/// Write the header followed by the given records, in order.
pub(crate) fn write_rows<W: Write>(writer: W, expenses: &[Expense]) -> LedgerResult<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(writer);
    w.write_record(HEADERS)?;
    for expense in expenses {
        w.serialize(ExpenseRow::from(expense))?;
    }
    w.flush()?;
    Ok(())
}

/// The durable, ordered collection of expenses in a single CSV file.
///
/// Every mutation is a full read-modify-write: load everything, change
/// the in-memory sequence, rewrite the whole file through a temp file
/// renamed over the target. Indices are 0-based offsets into the
/// persisted order and are re-derived on every operation.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create parent directories and materialize the header-only file
    /// when it is absent or empty. A zero-record store is represented
    /// by header-only content, not a missing file.
    pub fn ensure_initialized(&self) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let need_header = !self.path.exists() || fs::metadata(&self.path)?.len() == 0;
        if need_header {
            self.replace_all(&[])?;
        }
        Ok(())
    }

    /// Read every record in persisted (append) order.
    ///
    /// A missing or empty file is an empty store, not an error.
    pub fn load_all(&self) -> LedgerResult<Vec<Expense>> {
        if !self.path.exists() || fs::metadata(&self.path)?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut expenses = Vec::new();
        for result in reader.deserialize::<ExpenseRow>() {
            expenses.push(result?.try_into()?);
        }
        debug!(count = expenses.len(), "loaded ledger");
        Ok(expenses)
    }

    /// Rewrite the file as exactly the given records, preceded by the
    /// header. Written to a temp file in the same directory and renamed
    /// over the target, so a reader never observes a truncated file.
    pub fn replace_all(&self, expenses: &[Expense]) -> LedgerResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        write_rows(&mut tmp, expenses)?;
        tmp.persist(&self.path)
            .map_err(|e| LedgerError::Storage(e.error))?;

        debug!(count = expenses.len(), path = %self.path.display(), "rewrote ledger");
        Ok(())
    }

    /// Add a record at the end, everything else unchanged.
    pub fn append(&self, expense: Expense) -> LedgerResult<()> {
        let mut expenses = self.load_all()?;
        expenses.push(expense);
        self.replace_all(&expenses)
    }

    /// Replace the record at `index` in place.
    pub fn update_at(&self, index: usize, expense: Expense) -> LedgerResult<()> {
        let mut expenses = self.load_all()?;
        if index >= expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: expenses.len(),
            });
        }
        expenses[index] = expense;
        self.replace_all(&expenses)
    }

    /// Remove the record at `index`; later records shift down by one.
    pub fn remove_at(&self, index: usize) -> LedgerResult<Expense> {
        let mut expenses = self.load_all()?;
        if index >= expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: expenses.len(),
            });
        }
        let removed = expenses.remove(index);
        self.replace_all(&expenses)?;
        Ok(removed)
    }

    /// Remove the most recently appended record.
    pub fn remove_last(&self) -> LedgerResult<Expense> {
        let expenses = self.load_all()?;
        if expenses.is_empty() {
            return Err(LedgerError::NoEntries);
        }
        self.remove_at(expenses.len() - 1)
    }
}

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::errors::{LedgerError, LedgerResult};
use crate::store::write_rows;
use crate::types::Expense;

/// Writes point-in-time snapshots of a record sequence to a reports
/// directory, one uniquely named file per export.
///
/// The file carries the same header and format as the primary ledger,
/// so an export can be re-opened as a store.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    reports_dir: PathBuf,
}

impl ReportExporter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Snapshot the given records to `<stamp>_export.csv`, stamped with
    /// the current wall clock at second granularity.
    pub fn export(&self, expenses: &[Expense]) -> LedgerResult<PathBuf> {
        self.export_at(expenses, Local::now().naive_local())
    }

    /// Deterministic variant of [`export`](Self::export).
    ///
    /// Refuses an empty sequence without touching the filesystem.
    /// Exports within the same second share a name and overwrite.
    pub fn export_at(&self, expenses: &[Expense], stamp: NaiveDateTime) -> LedgerResult<PathBuf> {
        if expenses.is_empty() {
            return Err(LedgerError::NothingToExport);
        }

        fs::create_dir_all(&self.reports_dir)?;
        let path = self
            .reports_dir
            .join(format!("{}_export.csv", stamp.format("%Y%m%d_%H%M%S")));

        write_rows(File::create(&path)?, expenses)?;
        info!(count = expenses.len(), path = %path.display(), "exported report");
        Ok(path)
    }
}

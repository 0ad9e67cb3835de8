use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "EXPENSES_DIR";

const DEFAULT_DATA_DIR: &str = "data";
const LEDGER_FILE: &str = "expenses.csv";
const REPORTS_SUBDIR: &str = "reports";

/// Filesystem layout for a ledger: a data directory holding the primary
/// CSV plus a `reports/` subdirectory for exports.
///
/// Passed explicitly to whoever needs a path; there is no process-wide
/// current-file state.
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    data_dir: PathBuf,
}

impl LedgerPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from `EXPENSES_DIR`, falling back to
    /// `./data`.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_DATA_DIR),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The primary ledger file.
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }

    /// Where exports land, distinct from the primary file.
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir.join(REPORTS_SUBDIR)
    }

    /// Create the data and reports directories.
    pub fn ensure(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.reports_dir())
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layout_under_data_dir() {
        let paths = LedgerPaths::new("data");
        assert_eq!(paths.ledger_file(), PathBuf::from("data/expenses.csv"));
        assert_eq!(paths.reports_dir(), PathBuf::from("data/reports"));
    }

    #[test]
    fn test_ensure_creates_both_directories() {
        let dir = tempdir().unwrap();
        let paths = LedgerPaths::new(dir.path().join("data"));
        paths.ensure().unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(paths.reports_dir().is_dir());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = tempdir().unwrap();
        let paths = LedgerPaths::new(dir.path().join("data"));
        paths.ensure().unwrap();
        paths.ensure().unwrap();
        assert!(paths.reports_dir().is_dir());
    }
}

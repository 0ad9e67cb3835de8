use thiserror::Error;

/// Failures surfaced by the ledger core.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The backing file exists but could not be read or written
    #[error("failed to access ledger file: {0}")]
    Storage(#[from] std::io::Error),

    /// The backing file could not be parsed or serialized as CSV
    #[error("ledger file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A persisted row is structurally invalid (detail in the message)
    #[error("malformed ledger row: {0}")]
    MalformedRow(String),

    /// A positional operation was given an index outside the current store
    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// An operation requiring at least one entry ran against an empty store
    #[error("ledger has no entries")]
    NoEntries,

    /// Export was invoked with zero records; no file is created
    #[error("nothing to export")]
    NothingToExport,
}

/// Convenient alias for Result with the ledger error type
pub type LedgerResult<T> = Result<T, LedgerError>;

// Core structs: InputRow, ProductRecord, OutputRow, RunSummary and error types
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Value written into the `Command` column of every output row.
pub const MERGE_COMMAND: &str = "MERGE";

/// One row of the product export, reduced to the fields the labeler reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    pub handle: String,
    pub title: String,
    pub is_knife: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub handle: String,
    pub title: String,
    pub label: String,
}

/// Serialized positionally; the column names live in `storage::csv_table::OUTPUT_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub handle: String,
    pub command: &'static str,
    pub label: String,
}

impl From<&ProductRecord> for OutputRow {
    fn from(record: &ProductRecord) -> Self {
        Self {
            handle: record.handle.clone(),
            command: MERGE_COMMAND,
            label: record.label.clone(),
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub rows_read: usize,
    pub skipped_incomplete: usize,
    pub skipped_not_knife: usize,
    pub skipped_duplicate: usize,
    pub skipped_unreadable: usize,
    /// Records in first-seen order.
    pub records: Vec<ProductRecord>,
    /// Handles whose label came out empty and need a manual look.
    pub needs_review: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

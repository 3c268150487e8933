// Batch pipeline: filter, dedupe and label product rows
use crate::labeler::LabelExtractor;
use crate::model::{InputRow, OutputRow, PipelineError, ProductRecord, RunSummary, StorageError};
use crate::storage::{ProductTable, write_labels};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Why a row did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    Incomplete,
    NotKnife,
    Duplicate,
}

pub struct LabelPipeline<E> {
    extractor: E,
}

impl<E: LabelExtractor> LabelPipeline<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Reads the export at `input`, labels every knife product once and
    /// writes the bulk-update table to `output`. Nothing is written when the
    /// input is missing or reading fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }

        let mut table = ProductTable::open(input)?;
        self.label_rows(table.rows(), output)
    }

    /// Labels already-opened rows and writes the result. A read failure
    /// aborts before anything reaches `output`.
    pub fn label_rows<I>(&self, rows: I, output: &Path) -> Result<RunSummary, PipelineError>
    where
        I: IntoIterator<Item = Result<InputRow, csv::Error>>,
    {
        let summary = self.collect(rows)?;
        info!(
            "Read {} rows, {} unique products",
            summary.rows_read,
            summary.records.len()
        );

        let rows: Vec<OutputRow> = summary.records.iter().map(OutputRow::from).collect();
        write_labels(output, &rows)?;
        info!("Wrote {} rows to {}", rows.len(), output.display());

        Ok(summary)
    }

    /// Builds product records from rows in input order. The first row seen
    /// for a handle wins; later ones are ignored. Undecodable records are
    /// skipped, I/O errors end the run.
    pub fn collect<I>(&self, rows: I) -> Result<RunSummary, PipelineError>
    where
        I: IntoIterator<Item = Result<InputRow, csv::Error>>,
    {
        let mut summary = RunSummary::default();
        let mut seen: HashSet<String> = HashSet::new();

        for row in rows {
            summary.rows_read += 1;
            let row = match row {
                Ok(row) => row,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(StorageError::from(e).into());
                }
                Err(e) => {
                    debug!("Skipping unreadable row: {}", e);
                    summary.skipped_unreadable += 1;
                    continue;
                }
            };

            match self.accept(row, &seen) {
                Ok(record) => {
                    if record.label.is_empty() {
                        warn!(
                            "Empty label for {} ({:?}), needs manual review",
                            record.handle, record.title
                        );
                        summary.needs_review.push(record.handle.clone());
                    }
                    seen.insert(record.handle.clone());
                    summary.records.push(record);
                }
                Err(Skip::Incomplete) => summary.skipped_incomplete += 1,
                Err(Skip::NotKnife) => summary.skipped_not_knife += 1,
                Err(Skip::Duplicate) => summary.skipped_duplicate += 1,
            }
        }

        Ok(summary)
    }

    fn accept(&self, row: InputRow, seen: &HashSet<String>) -> Result<ProductRecord, Skip> {
        let handle = row.handle.trim();
        let title = row.title.trim();
        if handle.is_empty() || title.is_empty() {
            return Err(Skip::Incomplete);
        }

        let is_knife = row
            .is_knife
            .as_deref()
            .is_some_and(|flag| flag.trim().to_lowercase() == "true");
        if !is_knife {
            return Err(Skip::NotKnife);
        }

        if seen.contains(handle) {
            return Err(Skip::Duplicate);
        }

        Ok(ProductRecord {
            handle: handle.to_string(),
            title: title.to_string(),
            label: self.extractor.extract(title),
        })
    }
}

use crate::model::{InputRow, OutputRow, StorageError};
use csv::{Reader, ReaderBuilder, StringRecord, WriterBuilder};
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HANDLE_COLUMN: &str = "Handle";
pub const TITLE_COLUMN: &str = "Title";
pub const KNIFE_FLAG_COLUMN: &str = "Metafield: custom.isknife [boolean]";

pub const OUTPUT_HEADER: [&str; 3] = [
    "Handle",
    "Command",
    "Metafield: custom.thumbnail_label [single_line_text_field]",
];

/// Header positions of the columns the labeler reads.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    handle: Option<usize>,
    title: Option<usize>,
    is_knife: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        // Repeated header names resolve to the last column carrying the name.
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            handle: find(HANDLE_COLUMN),
            title: find(TITLE_COLUMN),
            is_knife: find(KNIFE_FLAG_COLUMN),
        }
    }

    fn field(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
        idx.and_then(|i| record.get(i))
    }

    fn to_row(self, record: &StringRecord) -> InputRow {
        InputRow {
            handle: Self::field(record, self.handle).unwrap_or_default().to_string(),
            title: Self::field(record, self.title).unwrap_or_default().to_string(),
            is_knife: Self::field(record, self.is_knife).map(str::to_string),
        }
    }
}

/// Product export opened for reading.
pub struct ProductTable {
    reader: Reader<File>,
    columns: Columns,
}

impl ProductTable {
    /// Opens the export and resolves column positions from its header row.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let columns = Columns::locate(reader.headers()?);

        for (name, idx) in [
            (HANDLE_COLUMN, columns.handle),
            (TITLE_COLUMN, columns.title),
            (KNIFE_FLAG_COLUMN, columns.is_knife),
        ] {
            if idx.is_none() {
                warn!(
                    "Column '{}' missing from {}, affected rows will be skipped",
                    name,
                    path.display()
                );
            }
        }

        Ok(Self { reader, columns })
    }

    /// Yields rows in file order. Records the CSV reader cannot decode and
    /// I/O failures both come back as errors; the caller tells them apart.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<InputRow, csv::Error>> + '_ {
        let columns = self.columns;
        self.reader
            .records()
            .map(move |record| record.map(|r| columns.to_row(&r)))
    }
}

/// Writes the bulk-update table. Rows go to a temporary sibling first and the
/// final path only appears once everything was flushed.
pub fn write_labels(path: &Path, rows: &[OutputRow]) -> Result<(), StorageError> {
    let tmp = temp_path(path);
    let result =
        write_to(&tmp, rows).and_then(|()| fs::rename(&tmp, path).map_err(StorageError::from));
    if result.is_err() {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            debug!("Could not remove {}: {}", tmp.display(), cleanup);
        }
    }
    result
}

fn write_to(path: &Path, rows: &[OutputRow]) -> Result<(), StorageError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

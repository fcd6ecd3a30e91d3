/// Export the current records to CSV or JSON.
use crate::error::ExportError;
use crate::model::{FileRecord, RecordSet};
use crate::report::format_created;
use serde::Serialize;
use std::io::Write;

/// Flat, serialisable view of a record.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub path: String,
    pub name: &'a str,
    pub size: u64,
    /// Empty when the creation time is unknown.
    pub created: String,
    pub available: bool,
    pub is_big: bool,
    pub is_archive: bool,
}

impl<'a> From<&'a FileRecord> for ExportRow<'a> {
    fn from(r: &'a FileRecord) -> Self {
        Self {
            path: r.path.to_string_lossy().into_owned(),
            name: r.name.as_str(),
            size: r.size,
            created: r
                .created_at
                .as_ref()
                .map(|t| format_created(Some(t)))
                .unwrap_or_default(),
            available: r.available,
            is_big: r.is_big,
            is_archive: r.is_archive,
        }
    }
}

/// Write one CSV row per record, with a header line.
pub fn write_csv<W: Write>(records: &RecordSet, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(ExportRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write all records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &RecordSet, writer: W) -> Result<(), ExportError> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

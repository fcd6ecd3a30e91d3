/// Display rows and prompt text for frontends.
///
/// Frontends never format records themselves; they render `RecordRow`s and
/// show the prompt strings built here, so every frontend presents the same
/// text.
use crate::activity_log::TIMESTAMP_FORMAT;
use crate::model::size::format_megabytes;
use crate::model::{FileRecord, RecordSet};
use chrono::{DateTime, Local};
use std::fmt;

/// Shown in place of an unreadable creation time.
pub const UNKNOWN_TIME: &str = "unknown";

pub const STATUS_OK: &str = "OK";
pub const STATUS_UNAVAILABLE: &str = "UNAVAILABLE";

/// Warning shown when the user tries to delete an unavailable file.
pub const UNAVAILABLE_WARNING: &str =
    "This file is unavailable for deletion (cloud placeholder or missing permissions).";

/// Error shown when the filesystem refuses a deletion.
pub const DELETE_FAILED_MESSAGE: &str =
    "Could not delete the file.\nIt may be in use by another program.";

/// Format a creation time, or the `"unknown"` sentinel.
pub fn format_created(created: Option<&DateTime<Local>>) -> String {
    match created {
        Some(t) => t.format(TIMESTAMP_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// One presentation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub name: String,
    pub size: String,
    pub created: String,
    pub status: &'static str,
}

impl RecordRow {
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            name: record.name.to_string(),
            size: format_megabytes(record.size),
            created: format_created(record.created_at.as_ref()),
            status: if record.available {
                STATUS_OK
            } else {
                STATUS_UNAVAILABLE
            },
        }
    }
}

impl fmt::Display for RecordRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.name, self.size, self.created, self.status
        )
    }
}

/// Rows for every record, in record-set order.
pub fn rows(records: &RecordSet) -> Vec<RecordRow> {
    records.iter().map(RecordRow::from_record).collect()
}

/// Confirmation text for bulk-deleting big archives.
pub fn bulk_delete_prompt(candidates: &[FileRecord]) -> String {
    let mut msg = String::from("Big archives:\n\n");
    for c in candidates {
        msg.push_str(&format!("{} ({})\n", c.name, format_megabytes(c.size)));
    }
    msg.push_str("\n\nDelete them PERMANENTLY?");
    msg
}

/// Confirmation text for deleting one file.
pub fn delete_prompt(record: &FileRecord) -> String {
    format!("Delete this file PERMANENTLY?\n\n{}", record.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelperConfig;
    use chrono::TimeZone;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn record(name: &str, size: Option<u64>) -> FileRecord {
        let created = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        FileRecord::new(
            PathBuf::from("/data").join(name),
            CompactString::new(name),
            size,
            Some(created),
            &HelperConfig::default(),
        )
    }

    #[test]
    fn test_row_for_available_file() {
        let row = RecordRow::from_record(&record("big.zip", Some(150 * 1024 * 1024)));
        assert_eq!(
            row.to_string(),
            "big.zip | 150.00 MB | 2024-03-05 14:07:09 | OK"
        );
    }

    #[test]
    fn test_row_for_unavailable_file() {
        let mut r = record("cloud.docx", None);
        r.created_at = None;
        let row = RecordRow::from_record(&r);
        assert_eq!(row.size, "0.00 MB");
        assert_eq!(row.created, UNKNOWN_TIME);
        assert_eq!(row.status, STATUS_UNAVAILABLE);
    }

    #[test]
    fn test_rows_follow_record_order() {
        let set = RecordSet::from_unsorted(vec![record("a", Some(1)), record("b", Some(2))]);
        let names: Vec<_> = rows(&set).into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_bulk_prompt_lists_every_candidate() {
        let prompt = bulk_delete_prompt(&[
            record("one.zip", Some(200 * 1024 * 1024)),
            record("two.rar", Some(101 * 1024 * 1024)),
        ]);
        assert!(prompt.contains("one.zip (200.00 MB)\n"));
        assert!(prompt.contains("two.rar (101.00 MB)\n"));
        assert!(prompt.ends_with("PERMANENTLY?"));
    }

    #[test]
    fn test_single_prompt_names_file() {
        assert!(delete_prompt(&record("notes.txt", Some(1))).ends_with("\n\nnotes.txt"));
    }
}

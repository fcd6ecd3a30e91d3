/// Per-file metadata lookup.
///
/// Size and creation time are read independently and each tried exactly
/// once. A failure in either marks the record unavailable, writes an
/// activity-log line, and adds a `ScanError`, but the record is still
/// produced.
use crate::activity_log::ActivityLog;
use crate::config::HelperConfig;
use crate::error::ScanError;
use crate::model::FileRecord;
use crate::platform;
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::fs;
use std::path::PathBuf;

/// Look up metadata for `path` and build its record.
pub fn read_record(
    path: PathBuf,
    name: CompactString,
    config: &HelperConfig,
    log: &ActivityLog,
    errors: &mut Vec<ScanError>,
) -> FileRecord {
    let size = match fs::metadata(&path) {
        Ok(meta) => Some(meta.len()),
        Err(source) => {
            log.unavailable_size(&path);
            errors.push(ScanError::Size {
                path: path.clone(),
                source,
            });
            None
        }
    };

    let created_at = match fs::metadata(&path).and_then(|meta| platform::creation_time(&meta)) {
        Ok(t) => Some(DateTime::<Local>::from(t)),
        Err(source) => {
            log.unavailable_created(&path);
            errors.push(ScanError::CreatedAt {
                path: path.clone(),
                source,
            });
            None
        }
    };

    FileRecord::new(path, name, size, created_at, config)
}

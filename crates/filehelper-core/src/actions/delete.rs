/// File deletion, single and bulk.
///
/// A deletion is attempted at most once per file. The record set is only
/// modified after the filesystem confirms the removal, so it always agrees
/// with what actually happened on disk.
use crate::activity_log::ActivityLog;
use crate::error::DeleteError;
use crate::model::{FileRecord, RecordSet};
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a bulk deletion.
#[derive(Debug, Default)]
pub struct BulkDeleteReport {
    /// Paths that were removed from disk and from the record set.
    pub deleted: Vec<PathBuf>,
    /// Candidates that were rejected or failed, with the reason.
    pub failed: Vec<DeleteError>,
}

impl BulkDeleteReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete the file behind `record` and drop it from `records`.
///
/// Unavailable records are rejected before any filesystem call. On failure
/// the record set is left untouched.
pub fn delete_record(
    records: &mut RecordSet,
    record: &FileRecord,
    log: &ActivityLog,
) -> Result<(), DeleteError> {
    if !record.available {
        warn!("Refusing to delete unavailable file {}", record.path.display());
        return Err(DeleteError::Unavailable {
            path: record.path.clone(),
        });
    }

    if let Err(source) = std::fs::remove_file(&record.path) {
        warn!("Failed to delete {}: {}", record.path.display(), source);
        return Err(DeleteError::Failed {
            path: record.path.clone(),
            source,
        });
    }

    info!("Deleted {}", record.path.display());
    log.deleted(&record.path);
    records.remove_by_path(&record.path);
    Ok(())
}

/// Delete each candidate independently. One failure never stops the rest.
pub fn delete_records(
    records: &mut RecordSet,
    candidates: &[FileRecord],
    log: &ActivityLog,
) -> BulkDeleteReport {
    let mut report = BulkDeleteReport::default();
    for candidate in candidates {
        match delete_record(records, candidate, log) {
            Ok(()) => report.deleted.push(candidate.path.clone()),
            Err(e) => report.failed.push(e),
        }
    }
    report
}

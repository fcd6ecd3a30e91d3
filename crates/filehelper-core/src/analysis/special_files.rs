/// Special-file detection: big, available archives.
///
/// These are offered to the user for bulk deletion after every scan. The
/// selection itself never deletes anything.
use crate::model::{FileRecord, RecordSet};

/// Records that are big, archives, and available, in record-set order
/// (largest first).
pub fn find_special_files(records: &RecordSet) -> Vec<FileRecord> {
    records
        .iter()
        .filter(|r| r.is_special())
        .cloned()
        .collect()
}

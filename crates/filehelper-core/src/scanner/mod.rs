/// Scanner module -- builds a fresh `RecordSet` from a directory tree.
///
/// The walk is serial and synchronous: `scan_directory` returns only once
/// every entry has been visited and its metadata looked up. Per-file and
/// per-directory failures are collected in the outcome and never abort
/// the scan.
pub mod metadata;

use crate::activity_log::ActivityLog;
use crate::config::HelperConfig;
use crate::error::ScanError;
use crate::model::RecordSet;
use compact_str::CompactString;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Everything a completed scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// One record per file found, sorted by size descending.
    pub records: RecordSet,
    /// Non-fatal problems, in the order they were met.
    pub errors: Vec<ScanError>,
    /// Wall-clock time the scan took.
    pub duration: Duration,
}

/// Scan `root` recursively and return a new record set.
///
/// Directories are descended into; every other entry becomes exactly one
/// `FileRecord`. Symlinks are not followed while walking, and a symlink
/// that resolves to a directory is skipped.
pub fn scan_directory(root: &Path, config: &HelperConfig, log: &ActivityLog) -> ScanOutcome {
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let mut records = Vec::new();
    let mut errors = Vec::new();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Walk error: {err}");
                errors.push(ScanError::Walk {
                    path: err.path().map(Path::to_path_buf),
                    message: err.to_string(),
                });
                continue;
            }
        };

        // The root itself is the scan target, not a result.
        if entry.depth == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if file_type.is_symlink() && path.is_dir() {
            continue;
        }

        let name = CompactString::new(entry.file_name().to_string_lossy());
        records.push(metadata::read_record(path, name, config, log, &mut errors));
    }

    let records = RecordSet::from_unsorted(records);
    log.scanned_directory(root);

    let duration = start.elapsed();
    info!(
        "Scan of {} complete: {} files, {} errors in {:?}",
        root.display(),
        records.len(),
        errors.len(),
        duration
    );

    ScanOutcome {
        records,
        errors,
        duration,
    }
}

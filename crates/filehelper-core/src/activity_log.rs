/// Append-only, user-facing activity log.
///
/// Each line is `YYYY-MM-DD HH:MM:SS | message` in local time. Writing is
/// best-effort: any I/O failure is traced at debug level and otherwise
/// ignored, so logging can never fail a scan or a deletion.
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Timestamp format used for log lines and displayed creation times.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    path: Option<PathBuf>,
}

impl ActivityLog {
    /// Log to `path`, creating it on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that discards every message.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Build from an optional configured path.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one timestamped line. Never fails.
    pub fn append(&self, message: &str) {
        let Some(path) = &self.path else {
            return;
        };
        let line = format!("{} | {}\n", Local::now().format(TIMESTAMP_FORMAT), message);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            debug!("Activity log write to {} failed: {}", path.display(), e);
        }
    }

    pub fn scanned_directory(&self, root: &Path) {
        self.append(&format!("scanned directory: {}", root.display()));
    }

    pub fn unavailable_size(&self, path: &Path) {
        self.append(&format!("unavailable size: {}", path.display()));
    }

    pub fn unavailable_created(&self, path: &Path) {
        self.append(&format!("unavailable creation time: {}", path.display()));
    }

    pub fn deleted(&self, path: &Path) {
        self.append(&format!("deleted: {}", path.display()));
    }
}

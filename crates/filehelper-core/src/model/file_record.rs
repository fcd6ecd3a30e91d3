/// A single file discovered by a scan.
///
/// Classification flags are computed once, when the record is built, from
/// the size and file name. They are never recomputed afterwards.
use crate::config::HelperConfig;
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: PathBuf,

    /// File name only (no directory components).
    pub name: CompactString,

    /// Logical size in bytes. `0` when the size could not be read.
    pub size: u64,

    /// Creation time, or `None` when it could not be read.
    pub created_at: Option<DateTime<Local>>,

    /// `false` if either the size or the creation-time lookup failed.
    /// Unavailable files are never deleted.
    pub available: bool,

    /// `size` exceeds the configured big-file threshold.
    pub is_big: bool,

    /// Extension is one of the configured archive extensions.
    pub is_archive: bool,
}

impl FileRecord {
    /// Build a record from looked-up metadata.
    ///
    /// `size` and `created_at` are `None` when their lookup failed; the
    /// record is then marked unavailable and the size defaults to zero.
    pub fn new(
        path: PathBuf,
        name: CompactString,
        size: Option<u64>,
        created_at: Option<DateTime<Local>>,
        config: &HelperConfig,
    ) -> Self {
        let available = size.is_some() && created_at.is_some();
        let size = size.unwrap_or(0);
        Self {
            is_big: config.classify_size(size),
            is_archive: config.is_archive_name(&name),
            path,
            name,
            size,
            created_at,
            available,
        }
    }

    /// Big, archive, and available: a candidate for prompted bulk deletion.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.is_big && self.is_archive && self.available
    }
}

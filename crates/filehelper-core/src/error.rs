/// Error types for the FileHelper core.
///
/// None of these are fatal: scan errors are collected per file, delete
/// errors are reported per file, and activity-log failures never surface
/// at all.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A non-fatal problem encountered while scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file size could not be read. The record is kept as unavailable.
    #[error("unavailable size: {path}: {source}")]
    Size {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The creation time could not be read. The record is kept as unavailable.
    #[error("unavailable creation time: {path}: {source}")]
    CreatedAt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory (or the root itself) could not be listed.
    #[error("walk error: {message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },
}

impl ScanError {
    /// Path the error refers to, if known.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Size { path, .. } | Self::CreatedAt { path, .. } => Some(path),
            Self::Walk { path, .. } => path.as_ref(),
        }
    }
}

/// Why a deletion did not happen.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The record is unavailable; no filesystem call was attempted.
    #[error("file unavailable: {path}")]
    Unavailable { path: PathBuf },

    /// The filesystem refused the removal (in use, permission, vanished).
    #[error("failed to delete {path}: {source}")]
    Failed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Path of the file the deletion was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Unavailable { path } | Self::Failed { path, .. } => path,
        }
    }
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to export the record set.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// FileHelper Core -- scanning, classification, deletion, and presentation.
///
/// This crate contains all business logic with zero UI dependencies.
/// Every operation is synchronous and runs on the calling thread, so any
/// frontend (GUI, CLI, tests) can drive it directly.
///
/// # Modules
///
/// - [`model`] -- `FileRecord`, the owned `RecordSet`, and size formatting.
/// - [`scanner`] -- Recursive directory walk producing a fresh `RecordSet`.
/// - [`analysis`] -- Post-scan selection of bulk-delete candidates.
/// - [`actions`] -- Single and bulk file deletion.
/// - [`report`] -- Display rows and confirmation prompt text.
/// - [`activity_log`] -- Best-effort append-only activity log.
/// - [`config`] -- Classification thresholds and log location.
/// - [`export`] -- CSV / JSON export of the current records.
/// - [`platform`] -- Creation-time lookup across platforms.
pub mod actions;
pub mod activity_log;
pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;

pub use activity_log::ActivityLog;
pub use config::HelperConfig;
pub use error::{ConfigError, DeleteError, ExportError, ScanError};
pub use model::{FileRecord, RecordSet};

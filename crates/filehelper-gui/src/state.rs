/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. Every user
/// action is an explicit method here, so the whole scan → prompt → delete
/// flow can be exercised without opening a window. Scans and deletions
/// run synchronously on the calling (UI) thread.
use filehelper_core::actions::{delete_record, delete_records};
use filehelper_core::analysis::find_special_files;
use filehelper_core::model::FileRecord;
use filehelper_core::report::{self, DELETE_FAILED_MESSAGE, UNAVAILABLE_WARNING};
use filehelper_core::scanner::scan_directory;
use filehelper_core::{ActivityLog, DeleteError, ExportError, HelperConfig, RecordSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing scanned yet.
    Idle,
    /// A scan has completed and its records are shown.
    Results,
}

/// A pending modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Offer to delete every big archive found by the last scan.
    ConfirmBulkDelete {
        candidates: Vec<FileRecord>,
        message: String,
    },
    /// Confirm deletion of the selected file.
    ConfirmDelete { record: FileRecord, message: String },
    /// Non-destructive notice (e.g. the file is unavailable).
    Warning(String),
    /// Something failed.
    Error(String),
}

impl Dialog {
    /// `true` for dialogs that ask a yes/no question.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::ConfirmBulkDelete { .. } | Self::ConfirmDelete { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ConfirmBulkDelete { .. } => "Big archives found",
            Self::ConfirmDelete { .. } => "Confirm deletion",
            Self::Warning(_) => "Unavailable",
            Self::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ConfirmBulkDelete { message, .. } | Self::ConfirmDelete { message, .. } => {
                message
            }
            Self::Warning(m) | Self::Error(m) => m,
        }
    }
}

/// Maximum scan error messages kept for the errors window.
pub const MAX_SCAN_ERRORS: usize = 1_000;

/// All application state.
pub struct AppState {
    // ── Configuration ──────────────────────────────────
    pub config: HelperConfig,
    pub log: ActivityLog,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    /// Contents of the toolbar path field.
    pub path_input: String,
    /// Root of the most recent scan.
    pub scan_root: Option<PathBuf>,
    pub scan_duration: Option<Duration>,
    pub scan_error_count: usize,
    pub scan_errors: Vec<String>,

    // ── Results ────────────────────────────────────────
    pub records: RecordSet,
    /// Index into `records` of the highlighted row.
    pub selected: Option<usize>,

    // ── UI state ───────────────────────────────────────
    pub dialog: Option<Dialog>,
    /// One-line feedback shown in the status bar.
    pub status_message: Option<String>,
    pub show_errors: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HelperConfig::default())
    }
}

impl AppState {
    /// Create initial application state from a loaded configuration.
    pub fn new(config: HelperConfig) -> Self {
        let log = ActivityLog::from_option(config.log_file.clone());
        let path_input = dirs::home_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            config,
            log,
            phase: AppPhase::Idle,
            path_input,
            scan_root: None,
            scan_duration: None,
            scan_error_count: 0,
            scan_errors: Vec::new(),
            records: RecordSet::new(),
            selected: None,
            dialog: None,
            status_message: None,
            show_errors: false,
            dark_mode: true,
        }
    }

    /// Scan the directory typed into the path field.
    pub fn scan_input(&mut self) {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            return;
        }
        let path = PathBuf::from(trimmed);
        if !path.is_dir() {
            self.dialog = Some(Dialog::Error(format!(
                "Not a directory:\n\n{}",
                path.display()
            )));
            return;
        }
        self.scan(path);
    }

    /// Scan `path`, replace the record set, and prompt for big archives.
    pub fn scan(&mut self, path: PathBuf) {
        let outcome = scan_directory(&path, &self.config, &self.log);

        self.scan_error_count = outcome.errors.len();
        self.scan_errors = outcome
            .errors
            .iter()
            .take(MAX_SCAN_ERRORS)
            .map(|e| e.to_string())
            .collect();
        self.scan_duration = Some(outcome.duration);
        self.records = outcome.records;
        self.selected = None;
        self.phase = AppPhase::Results;
        self.status_message = None;
        self.path_input = path.to_string_lossy().into_owned();
        self.scan_root = Some(path);

        self.offer_special_files();
    }

    /// Open the bulk-delete prompt if the current records contain special files.
    fn offer_special_files(&mut self) {
        let candidates = find_special_files(&self.records);
        if candidates.is_empty() {
            return;
        }
        info!("{} big archive(s) offered for deletion", candidates.len());
        self.dialog = Some(Dialog::ConfirmBulkDelete {
            message: report::bulk_delete_prompt(&candidates),
            candidates,
        });
    }

    /// Highlight a row. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.records.len()).then_some(index);
    }

    pub fn selected_record(&self) -> Option<&FileRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Ask to delete the selected file, or warn if it is unavailable.
    pub fn request_delete_selected(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            return;
        };
        self.dialog = Some(if record.available {
            Dialog::ConfirmDelete {
                message: report::delete_prompt(&record),
                record,
            }
        } else {
            Dialog::Warning(UNAVAILABLE_WARNING.to_string())
        });
    }

    /// The user answered "Yes" (or "OK") to the open dialog.
    pub fn confirm_dialog(&mut self) {
        match self.dialog.take() {
            Some(Dialog::ConfirmBulkDelete { candidates, .. }) => {
                let outcome = delete_records(&mut self.records, &candidates, &self.log);
                self.selected = None;
                self.status_message = Some(format!("Deleted {} file(s)", outcome.deleted.len()));
                if !outcome.is_clean() {
                    self.dialog = Some(Dialog::Error(failure_message(&outcome.failed)));
                }
            }
            Some(Dialog::ConfirmDelete { record, .. }) => {
                match delete_record(&mut self.records, &record, &self.log) {
                    Ok(()) => {
                        self.selected = None;
                        self.status_message = Some(format!("Deleted {}", record.name));
                    }
                    Err(e) => {
                        self.dialog = Some(Dialog::Error(failure_message(std::slice::from_ref(&e))));
                    }
                }
            }
            Some(Dialog::Warning(_)) | Some(Dialog::Error(_)) | None => {}
        }
    }

    /// The user answered "No" or closed the dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Write the current records as CSV to `path`.
    pub fn export_csv(&mut self, path: &Path) -> Result<(), ExportError> {
        let result = std::fs::File::create(path)
            .map_err(ExportError::from)
            .and_then(|file| filehelper_core::export::write_csv(&self.records, file));
        match &result {
            Ok(()) => {
                info!("Exported {} records to {}", self.records.len(), path.display());
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                self.status_message = Some(format!("Export failed: {e}"));
            }
        }
        result
    }

    /// Default export target: beside the scanned folder, or in the home
    /// directory before the first scan.
    pub fn default_export_path(&self) -> PathBuf {
        self.scan_root
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filehelper-export.csv")
    }
}

/// User-facing text for one or more failed deletions.
fn failure_message(failed: &[DeleteError]) -> String {
    let mut msg = String::from(DELETE_FAILED_MESSAGE);
    msg.push_str("\n\n");
    for e in failed {
        let reason = match e {
            DeleteError::Unavailable { .. } => "unavailable".to_string(),
            DeleteError::Failed { source, .. } => source.to_string(),
        };
        msg.push_str(&format!("{} ({})\n", e.path().display(), reason));
    }
    msg
}

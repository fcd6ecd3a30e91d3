/// Classification thresholds and activity-log location.
///
/// The defaults reproduce the built-in behaviour (100 MiB big-file
/// threshold, five archive extensions, log next to the executable). A JSON
/// file at `<config_dir>/filehelper/config.json` may override any field.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files strictly larger than this are "big" (100 MiB).
pub const DEFAULT_BIG_FILE_THRESHOLD: u64 = 100 * 1024 * 1024;

/// Archive extensions recognised out of the box (lowercase, no dot).
pub const DEFAULT_ARCHIVE_EXTENSIONS: [&str; 5] = ["zip", "rar", "7z", "tar", "gz"];

/// Name of the activity log file.
pub const LOG_FILE_NAME: &str = "file_helper.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Size in bytes above which a file is classified as big.
    pub big_file_threshold: u64,

    /// Archive extensions, matched case-insensitively. A leading dot is
    /// accepted and ignored.
    pub archive_extensions: Vec<String>,

    /// Where the activity log is appended. `None` disables it.
    pub log_file: Option<PathBuf>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            big_file_threshold: DEFAULT_BIG_FILE_THRESHOLD,
            archive_extensions: DEFAULT_ARCHIVE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            log_file: Some(default_log_path()),
        }
    }
}

impl HelperConfig {
    /// Load from a JSON file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the per-user config location, or return the defaults if
    /// no config file exists there.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `true` if `size` exceeds the big-file threshold.
    #[inline]
    pub fn classify_size(&self, size: u64) -> bool {
        size > self.big_file_threshold
    }

    /// `true` if the extension of `name` is one of the archive extensions.
    pub fn is_archive_name(&self, name: &str) -> bool {
        let ext = match Path::new(name).extension() {
            Some(ext) => ext.to_string_lossy(),
            None => return false,
        };
        self.archive_extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }
}

/// `<config_dir>/filehelper/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filehelper").join("config.json"))
}

/// The log lives next to the executable, or in the working directory when
/// the executable path cannot be resolved.
fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

//! Path utilities.
//!
//! Resolution of user-typed paths (tilde expansion, canonicalization) and the
//! location of Izumi's data directory, where the log file lives.

use crate::domain::error::{IzumiError, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Returns the data directory for Izumi.
///
/// Resolves to the platform data directory joined with `izumi`, for example
/// `~/.local/share/izumi` on Linux. Falls back to the system temp directory
/// when the platform reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("izumi")
}

/// Returns the default configuration file path, `<config dir>/izumi/config.toml`.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("izumi").join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use izumi::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~x"), "relative/~x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string_lossy().into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

/// Resolves `path` to an absolute, canonical path.
///
/// # Errors
///
/// Returns [`IzumiError::FileNotFound`] if the path does not exist, or
/// [`IzumiError::Io`] for any other resolution failure.
pub fn resolve_absolute(path: &str) -> Result<PathBuf> {
    let expanded = PathBuf::from(expand_tilde(path));

    std::fs::canonicalize(&expanded).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IzumiError::FileNotFound(expanded),
        _ => IzumiError::Io(e),
    })
}

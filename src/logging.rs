//! File logging for the terminal application.
//!
//! The alternate screen owns stdout and stderr while the TUI runs, so
//! `tracing` output only goes to a file, and only when one is configured.
//! `RUST_LOG` selects the filter; the default is `info`.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use tracing_subscriber::EnvFilter;

use crate::error::ConsultError;

/// Installs a global subscriber that appends plain-text logs to `path`.
///
/// # Errors
///
/// Returns [`ConsultError::Io`] when the file cannot be opened and
/// [`ConsultError::Configuration`] when a subscriber is already installed.
pub fn init_file_logging(path: &Utf8Path) -> Result<(), ConsultError> {
    let io_error = |message: String| ConsultError::Io {
        message: format!("failed to open log file '{path}': {message}"),
    };

    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("path has no file name".to_owned()))?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| io_error(error.to_string()))?;
    let file = dir
        .open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|error| io_error(error.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_ansi(false)
        .with_writer(Mutex::new(file.into_std()))
        .try_init()
        .map_err(|error| ConsultError::Configuration {
            message: format!("failed to install logger: {error}"),
        })
}

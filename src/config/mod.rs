//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – built-in directory, default wording, home screen
//! 2. **Configuration file** – `.consult.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CONSULT_DIRECTORY`, `CONSULT_LOG_FILE`,
//!    and the template variables
//! 4. **Command-line arguments** – `--directory`/`-d`, `--open-consult`/`-c`,
//!    `--log-file`/`-l`
//!
//! # Configuration File
//!
//! ```toml
//! directory = "professionals.json"
//! open_consult = true
//! log_file = "consult.log"
//! consultation_template = "Consultation request sent to {{ professional }}"
//! rating_template = "Thank you for rating {{ professional }} {{ stars }} stars!"
//! ```

use std::sync::Arc;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::error::ConsultError;
use crate::notify::{
    AcknowledgmentTemplates, DEFAULT_CONSULTATION_TEMPLATE, DEFAULT_RATING_TEMPLATE,
    TracingNotifier,
};
use crate::tui::{Route, StartupContext};

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use consult::ConsultConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ConsultConfig::load().expect("failed to load configuration");
/// let directory = config.load_directory().expect("directory should load");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CONSULT",
    discovery(
        dotfile_name = ".consult.toml",
        config_file_name = "consult.toml",
        app_name = "consult"
    )
)]
pub struct ConsultConfig {
    /// Path of a JSON file listing the professionals.
    ///
    /// When unset, the built-in professionals are used.
    ///
    /// Can be provided via:
    /// - CLI: `--directory <PATH>` or `-d <PATH>`
    /// - Environment: `CONSULT_DIRECTORY`
    /// - Config file: `directory = "..."`
    #[ortho_config(cli_short = 'd')]
    pub directory: Option<String>,

    /// Starts on the consult screen instead of the home screen.
    ///
    /// Can be provided via:
    /// - CLI: `--open-consult` / `-c`
    /// - Config file: `open_consult = true`
    ///
    /// Note: `CONSULT_OPEN_CONSULT` is not supported because `ortho_config`
    /// does not load boolean values from the environment.
    #[ortho_config(cli_short = 'c')]
    pub open_consult: bool,

    /// File that receives `tracing` output.
    ///
    /// The terminal is owned by the TUI, so logs are only written when a
    /// file is configured.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>` or `-l <PATH>`
    /// - Environment: `CONSULT_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config(cli_short = 'l')]
    pub log_file: Option<String>,

    /// Template for the consultation acknowledgment.
    ///
    /// Receives `professional`. Defaults to
    /// `Consultation request sent to {{ professional }}`.
    #[ortho_config()]
    pub consultation_template: Option<String>,

    /// Template for the rating acknowledgment.
    ///
    /// Receives `professional` and `stars`. Defaults to
    /// `Thank you for rating {{ professional }} {{ stars }} stars!`.
    #[ortho_config()]
    pub rating_template: Option<String>,
}

impl ConsultConfig {
    /// Loads the configured directory, or the built-in one when no file is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConsultError::Directory`] when the file cannot be read,
    /// parsed, or fails validation.
    pub fn load_directory(&self) -> Result<Directory, ConsultError> {
        self.directory.as_deref().map_or_else(
            || Ok(Directory::builtin()),
            |path| Ok(Directory::load(Utf8Path::new(path))?),
        )
    }

    /// Builds the acknowledgment templates, filling unset ones with the
    /// default wording.
    ///
    /// # Errors
    ///
    /// Returns [`ConsultError::Template`] when a configured template does
    /// not parse.
    pub fn acknowledgment_templates(&self) -> Result<AcknowledgmentTemplates, ConsultError> {
        if self.consultation_template.is_none() && self.rating_template.is_none() {
            return Ok(AcknowledgmentTemplates::default());
        }

        let consultation = self
            .consultation_template
            .as_deref()
            .unwrap_or(DEFAULT_CONSULTATION_TEMPLATE);
        let rating = self
            .rating_template
            .as_deref()
            .unwrap_or(DEFAULT_RATING_TEMPLATE);
        Ok(AcknowledgmentTemplates::new(consultation, rating)?)
    }

    /// Returns the route shown on the first frame.
    #[must_use]
    pub const fn start_route(&self) -> Route {
        if self.open_consult {
            Route::Consult
        } else {
            Route::Home
        }
    }

    /// Returns the configured log file path, if any.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref().map(Utf8Path::new)
    }

    /// Resolves everything the TUI needs before its first frame.
    ///
    /// # Errors
    ///
    /// Returns [`ConsultError::Directory`] or [`ConsultError::Template`]
    /// when the configured directory or templates are unusable.
    pub fn startup_context(&self) -> Result<StartupContext, ConsultError> {
        Ok(StartupContext {
            directory: self.load_directory()?,
            templates: self.acknowledgment_templates()?,
            notifier: Arc::new(TracingNotifier),
            start_route: self.start_route(),
        })
    }

    /// Loads configuration from CLI, environment, and files.
    ///
    /// # Errors
    ///
    /// Returns [`ConsultError::Configuration`] when ortho-config fails to
    /// parse arguments or load configuration files.
    pub fn load_layered() -> Result<Self, ConsultError> {
        Self::load().map_err(|error| ConsultError::Configuration {
            message: error.to_string(),
        })
    }
}

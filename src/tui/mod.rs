//! Terminal user interface for consulting professionals.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::ConsultApp`], which routes between the home screen
//!   and the consult screen view-model
//! - **View**: string rendering in [`components`] and the app's rendering
//!   helpers
//! - **Update**: message-driven transitions in `handle_message()`
//!
//! # Startup context
//!
//! bubbletea-rs calls `Model::init()` as a static function, so startup data
//! (directory, acknowledgment templates, notifier, initial route) is handed
//! over through module-level storage. Call [`set_startup_context`] before
//! starting the program; `ConsultApp::init()` reads it, falling back to the
//! built-in directory and default wording when nothing was set.

use std::sync::{Arc, OnceLock};

use crate::directory::Directory;
use crate::notify::{AcknowledgmentTemplates, Notifier, TracingNotifier};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::{ConsultApp, Focus, Route};

/// Global storage for startup data.
static STARTUP_CONTEXT: OnceLock<StartupContext> = OnceLock::new();

/// Data the application needs before its first frame.
#[derive(Debug, Clone)]
pub struct StartupContext {
    /// Professionals to list on the consult screen.
    pub directory: Directory,
    /// Wording for acknowledgments.
    pub templates: AcknowledgmentTemplates,
    /// Sink that receives every acknowledgment.
    pub notifier: Arc<dyn Notifier>,
    /// Route shown on the first frame.
    pub start_route: Route,
}

impl Default for StartupContext {
    fn default() -> Self {
        Self {
            directory: Directory::builtin(),
            templates: AcknowledgmentTemplates::default(),
            notifier: Arc::new(TracingNotifier),
            start_route: Route::Home,
        }
    }
}

/// Sets the startup context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_startup_context(context: StartupContext) -> bool {
    STARTUP_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the startup context, or the defaults when unset.
pub(crate) fn get_startup_context() -> StartupContext {
    STARTUP_CONTEXT.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_uses_builtin_directory_and_home_route() {
        let context = StartupContext::default();

        assert_eq!(context.directory, Directory::builtin());
        assert_eq!(context.templates, AcknowledgmentTemplates::default());
        assert_eq!(context.start_route, Route::Home);
    }

    #[test]
    fn startup_context_is_readable_after_set() {
        // OnceLock may already hold a value from another test; either way the
        // getter must return a usable context.
        let _ = set_startup_context(StartupContext::default());

        let context = get_startup_context();

        assert!(!context.directory.is_empty());
    }
}

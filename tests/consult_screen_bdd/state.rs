//! Scenario state for consult screen BDD tests.

use std::sync::Arc;

use consult::notify::test_support::RecordingNotifier;
use consult::tui::ConsultApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a consult screen scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ConsultState {
    /// The TUI application model under test.
    pub(crate) app: Slot<ConsultApp>,
    /// Sink capturing every acknowledgment the app sends.
    pub(crate) notifier: Slot<Arc<RecordingNotifier>>,
    /// The rendered view output.
    pub(crate) rendered_view: Slot<String>,
}

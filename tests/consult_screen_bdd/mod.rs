//! Support modules for consult screen BDD tests.

pub(crate) mod state;

pub(crate) use state::ConsultState;

use serde::{Deserialize, Serialize};

/// Intervention session state.
///
/// `Idle` is both the initial and the terminal state of an invocation.
/// Exactly one sub-flow is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionState {
    #[default]
    Idle,
    /// The breathing exercise is presented full-screen.
    ShowingBreathing,
    /// The dhikr counter is presented full-screen.
    ShowingDhikr,
}

//! Intervention state machine.
//!
//! Pure transition function for a single "tempted" session. The application
//! layer executes the returned actions in order; the machine itself never
//! touches a presentation or a callback.

use crate::intervention::action::InterventionAction;
use crate::intervention::event::InterventionEvent;
use crate::intervention::state::InterventionState;

/// Pure intervention state machine: no side effects.
pub struct InterventionStateMachine;

impl InterventionStateMachine {
    pub fn transition(
        state: InterventionState,
        event: InterventionEvent,
    ) -> (InterventionState, Vec<InterventionAction>) {
        match (state, event) {
            (InterventionState::Idle, InterventionEvent::BreathingSelected) => (
                InterventionState::ShowingBreathing,
                vec![InterventionAction::PresentBreathing],
            ),
            (InterventionState::Idle, InterventionEvent::DhikrSelected) => (
                InterventionState::ShowingDhikr,
                vec![InterventionAction::PresentDhikr],
            ),
            (
                InterventionState::ShowingBreathing | InterventionState::ShowingDhikr,
                InterventionEvent::SubFlowCompleted,
            ) => (
                InterventionState::Idle,
                // Dismiss strictly before notifying the caller.
                vec![
                    InterventionAction::DismissFlow,
                    InterventionAction::NotifyCompletion,
                ],
            ),
            // The community link never enters a sub-flow state.
            (state, InterventionEvent::CommunitySelected) => {
                (state, vec![InterventionAction::OpenCommunityLink])
            }
            (InterventionState::Idle, InterventionEvent::CloseRequested) => {
                (InterventionState::Idle, vec![InterventionAction::DismissFlow])
            }
            (
                InterventionState::ShowingBreathing | InterventionState::ShowingDhikr,
                InterventionEvent::CloseRequested,
            ) => (
                InterventionState::Idle,
                vec![
                    InterventionAction::DismissSubFlow,
                    InterventionAction::DismissFlow,
                ],
            ),
            (state, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(state = ?state, event = ?_event, "intervention event ignored");
                (state, Vec::new())
            }
        }
    }
}

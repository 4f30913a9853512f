/// Side-effects produced by intervention transitions.
///
/// Action order within a transition is part of the contract: dismissal
/// always precedes the completion notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterventionAction {
    /// Present the breathing exercise full-screen.
    PresentBreathing,

    /// Present the dhikr counter full-screen.
    PresentDhikr,

    /// Tear down the active sub-flow presentation.
    DismissSubFlow,

    /// Dismiss the intervention flow's own presentation.
    DismissFlow,

    /// Fire the caller-supplied completion notifier (at most once per
    /// session).
    NotifyCompletion,

    /// Open the community link externally.
    OpenCommunityLink,
}

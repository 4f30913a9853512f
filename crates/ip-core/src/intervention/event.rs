/// Events that drive an intervention session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterventionEvent {
    /// The user chose the breathing exercise.
    BreathingSelected,

    /// The user chose the dhikr counter.
    DhikrSelected,

    /// The active sub-flow reported completion.
    SubFlowCompleted,

    /// The user chose the community link.
    CommunitySelected,

    /// The user dismissed the whole flow.
    CloseRequested,
}

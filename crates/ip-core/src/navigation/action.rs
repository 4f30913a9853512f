/// Side-effects produced by navigation transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Persist the prepaywall-seen flag.
    PersistPrepaywallSeen,

    /// Mark the tutorial flag on the persisted user record.
    MarkTutorialComplete,
}

/// Events that evolve the navigation flags.
///
/// Each event is raised by the flag's designated owner: the onboarding flow,
/// the pre-paywall continue action, the subscription service, or the
/// tutorial-complete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Onboarding reached its terminal step.
    OnboardingCompleted,

    /// The user tapped "continue" on the pre-paywall screen.
    ContinueToPaywall,

    /// The subscription service reported a new entitlement value.
    SubscriptionChanged { subscribed: bool },

    /// The user finished the one-time tutorial.
    TutorialCompleted,
}

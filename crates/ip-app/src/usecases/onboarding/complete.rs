use std::sync::Arc;

use ip_core::ports::OnboardingStatePort;

/// Use case for completing onboarding.
///
/// Marks the pre-paywall introduction as seen in the persistent state. This
/// is the terminal step of the onboarding flow and the only writer of the
/// flag.
pub struct CompleteOnboarding {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl CompleteOnboarding {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    /// Mark the pre-paywall introduction as seen.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut state = self.onboarding_state.get_state().await?;
        state.has_seen_prepaywall = true;
        self.onboarding_state.set_state(&state).await
    }
}

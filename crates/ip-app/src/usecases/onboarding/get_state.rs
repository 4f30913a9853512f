use std::sync::Arc;

use ip_core::onboarding::OnboardingState;
use ip_core::ports::OnboardingStatePort;

/// Read the persisted onboarding state.
///
/// A missing or empty store yields the default state, never an error.
pub struct GetOnboardingState {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl GetOnboardingState {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingState> {
        self.onboarding_state.get_state().await
    }
}

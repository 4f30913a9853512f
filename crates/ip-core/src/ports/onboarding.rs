//! Onboarding state port
//!
//! This port defines the contract for persisting and retrieving onboarding
//! state. Implementations are provided by the infrastructure layer (e.g.,
//! file-based storage).

use crate::onboarding::OnboardingState;
use async_trait::async_trait;

#[async_trait]
pub trait OnboardingStatePort: Send + Sync {
    /// Get current onboarding state
    async fn get_state(&self) -> anyhow::Result<OnboardingState>;

    /// Update onboarding state
    async fn set_state(&self, state: &OnboardingState) -> anyhow::Result<()>;

    /// Reset onboarding (for testing or re-onboarding)
    async fn reset(&self) -> anyhow::Result<()>;

    /// Check if the user has seen the pre-paywall introduction
    async fn has_seen_prepaywall(&self) -> anyhow::Result<bool> {
        Ok(self.get_state().await?.has_seen_prepaywall)
    }
}

//! Onboarding domain models
//!
//! This module defines the persisted state of the introductory onboarding
//! flow. The flow itself is an opaque presentation owned by the shell; the
//! core only cares about its terminal outcome.

/// Onboarding flow state
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OnboardingState {
    /// Whether the user has reached the end of onboarding and seen the
    /// pre-paywall introduction. Monotonic within a session: once true it
    /// is never reset to false.
    pub has_seen_prepaywall: bool,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            has_seen_prepaywall: false,
        }
    }
}

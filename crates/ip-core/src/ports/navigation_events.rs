use crate::navigation::AppScreen;
use async_trait::async_trait;

/// Outbound notification channel for screen changes.
///
/// The shell renders whatever screen was last emitted; the transition
/// animation between screens is presentation detail, not contract.
#[async_trait]
pub trait NavigationEventPort: Send + Sync {
    async fn emit_screen_changed(&self, screen: AppScreen);
}

//! Subscription domain models
//!
//! Subscription entitlement is owned by an external store service. The core
//! consumes it as a live boolean plus a change feed; it never mutates it.

/// Entitlement change notifications delivered by the subscription service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionEvent {
    /// A purchase or restore completed and the entitlement is now active.
    Activated,
    /// The entitlement lapsed (expiry, refund, or external revocation).
    Deactivated,
}

impl SubscriptionEvent {
    /// The entitlement value implied by this event.
    pub fn is_subscribed(&self) -> bool {
        matches!(self, SubscriptionEvent::Activated)
    }
}

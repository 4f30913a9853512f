//! Subscription entitlement port
//!
//! Backed by the external store service. The core observes the entitlement;
//! mutation happens only through purchase/restore flows outside this core,
//! so the port deliberately exposes no setter.

use crate::subscription::SubscriptionEvent;
use async_trait::async_trait;
use tokio::sync::mpsc;

#[async_trait]
pub trait SubscriptionPort: Send + Sync {
    /// Current entitlement value.
    async fn is_subscribed(&self) -> bool;

    /// Subscribe to entitlement changes.
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<SubscriptionEvent>>;
}

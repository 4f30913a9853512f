use anyhow::Result;

/// Presentation surface of the intervention flow.
///
/// Both sub-flows are opaque full-screen presentations owned exclusively by
/// the flow while active; their only feedback channel is the completion
/// event the shell feeds back into the orchestrator.
#[async_trait::async_trait]
pub trait InterventionUiPort: Send + Sync {
    async fn present_breathing(&self) -> Result<()>;

    async fn present_dhikr(&self) -> Result<()>;

    /// Tear down the active sub-flow presentation, if any.
    async fn dismiss_sub_flow(&self) -> Result<()>;

    /// Dismiss the intervention flow's own presentation.
    async fn dismiss_flow(&self) -> Result<()>;
}

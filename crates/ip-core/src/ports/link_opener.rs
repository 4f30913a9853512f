use anyhow::Result;

/// Opens a URI in an external handler (browser, app).
///
/// Callers swallow failures: a link that cannot be opened is a no-op, never
/// an error surfaced to a flow.
#[async_trait::async_trait]
pub trait LinkOpenerPort: Send + Sync {
    async fn open_external(&self, url: &str) -> Result<()>;
}

use std::sync::Arc;

use ip_core::ports::UserRepositoryPort;
use tracing::warn;

/// Display name for the pre-paywall greeting.
///
/// Absence of a record (or a failing store) yields the empty string; this
/// lookup never faults.
pub struct GetDisplayName {
    users: Arc<dyn UserRepositoryPort>,
}

impl GetDisplayName {
    pub fn new(users: Arc<dyn UserRepositoryPort>) -> Self {
        Self { users }
    }

    pub async fn execute(&self) -> String {
        match self.users.current().await {
            Ok(Some(record)) => record.display_name,
            Ok(None) => String::new(),
            Err(err) => {
                warn!(error = %err, "user record lookup failed, defaulting display name");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ip_core::user::UserRecord;

    struct StaticUserRepository(Option<UserRecord>);

    #[async_trait::async_trait]
    impl UserRepositoryPort for StaticUserRepository {
        async fn current(&self) -> anyhow::Result<Option<UserRecord>> {
            Ok(self.0.clone())
        }

        async fn upsert(&self, _record: &UserRecord) -> anyhow::Result<()> {
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct FailingUserRepository;

    #[async_trait::async_trait]
    impl UserRepositoryPort for FailingUserRepository {
        async fn current(&self) -> anyhow::Result<Option<UserRecord>> {
            Err(anyhow::anyhow!("store unavailable"))
        }

        async fn upsert(&self, _record: &UserRecord) -> anyhow::Result<()> {
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn returns_persisted_display_name() {
        let record = UserRecord::new("Khadija", chrono::Utc::now());
        let use_case = GetDisplayName::new(Arc::new(StaticUserRepository(Some(record))));

        assert_eq!(use_case.execute().await, "Khadija");
    }

    #[tokio::test]
    async fn missing_record_yields_empty_string() {
        let use_case = GetDisplayName::new(Arc::new(StaticUserRepository(None)));

        assert_eq!(use_case.execute().await, "");
    }

    #[tokio::test]
    async fn failing_store_yields_empty_string() {
        let use_case = GetDisplayName::new(Arc::new(FailingUserRepository));

        assert_eq!(use_case.execute().await, "");
    }
}

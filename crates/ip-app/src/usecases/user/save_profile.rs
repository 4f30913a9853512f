use std::sync::Arc;

use ip_core::ports::{ClockPort, UserRepositoryPort};
use ip_core::user::UserRecord;

/// Persist the profile captured during onboarding.
///
/// Upserts into the single-record store: an existing record keeps its id,
/// tutorial flag, and creation timestamp; only the display name changes.
pub struct SaveUserProfile {
    users: Arc<dyn UserRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveUserProfile {
    pub fn new(users: Arc<dyn UserRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { users, clock }
    }

    pub async fn execute(&self, display_name: &str) -> anyhow::Result<UserRecord> {
        let record = match self.users.current().await? {
            Some(mut existing) => {
                existing.display_name = display_name.trim().to_string();
                existing
            }
            None => UserRecord::new(display_name.trim(), self.clock.now()),
        };

        self.users.upsert(&record).await?;
        Ok(record)
    }
}

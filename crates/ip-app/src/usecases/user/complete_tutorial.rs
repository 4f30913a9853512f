use std::sync::Arc;

use ip_core::ports::{ClockPort, UserRepositoryPort};
use ip_core::user::UserRecord;

/// Use case for completing the one-time tutorial.
///
/// Loads the current user record and marks its tutorial flag. When no
/// record exists yet (first launch before a profile was saved) a default
/// record is created so the flag has somewhere to live.
pub struct CompleteTutorial {
    users: Arc<dyn UserRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl CompleteTutorial {
    pub fn new(users: Arc<dyn UserRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { users, clock }
    }

    /// Mark the tutorial as seen on the persisted record.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut record = match self.users.current().await? {
            Some(record) => record,
            None => UserRecord::new("", self.clock.now()),
        };

        if record.has_seen_tutorial {
            return Ok(());
        }

        record.has_seen_tutorial = true;
        self.users.upsert(&record).await
    }
}

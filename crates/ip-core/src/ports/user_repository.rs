//! User record port
//!
//! The store is expected to hold at most one record; `current` is a
//! "first or none" lookup and absence is not an error.

use crate::user::UserRecord;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// The single persisted record, if one exists.
    async fn current(&self) -> anyhow::Result<Option<UserRecord>>;

    /// Insert or replace the single record.
    async fn upsert(&self, record: &UserRecord) -> anyhow::Result<()>;

    /// Delete the record (for testing or account reset).
    async fn reset(&self) -> anyhow::Result<()>;
}

//! User domain models
//!
//! The persistence store is expected to hold at most one user record (a
//! "first or none" lookup). Absence of a record is never an error: callers
//! fall back to [`UserRecord::default`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single user profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,

    /// Display name captured during onboarding. Empty when the user never
    /// provided one.
    #[serde(default)]
    pub display_name: String,

    /// Set true exactly once, by the explicit tutorial-complete action.
    #[serde(default)]
    pub has_seen_tutorial: bool,

    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a fresh record stamped at `now`.
    pub fn new(display_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            has_seen_tutorial: false,
            created_at: now,
        }
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: String::new(),
            has_seen_tutorial: false,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

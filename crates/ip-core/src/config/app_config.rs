//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Compiled defaults are authoritative; the infrastructure layer may
/// overlay values from a config file and environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// External community destination offered from the intervention flow.
    pub community_link: String,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File name of the persisted onboarding state, relative to the data dir.
    pub onboarding_state_file: String,

    /// File name of the persisted user record, relative to the data dir.
    pub user_record_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            community_link: "https://imanpath.app/community".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            onboarding_state_file: "onboarding_state.json".to_string(),
            user_record_file: "user.json".to_string(),
        }
    }
}

//! # ip-infra
//!
//! Infrastructure adapters for ImanPath: file-based persistence for the
//! onboarding flag and the single user record, config loading, and the
//! system clock. Screen presentation and link opening belong to the
//! platform shell and are not implemented here.

pub mod config;
pub mod fs;
pub mod onboarding;
pub mod time;
pub mod user;

pub use self::config::load_app_config;
pub use self::onboarding::FileOnboardingStateRepository;
pub use self::time::SystemClock;
pub use self::user::FileUserRepository;

//! File-based onboarding state repository
//!
//! Persists the onboarding flag to a JSON file in the application data
//! directory. A missing or empty file reads as the default state; writes go
//! through a temp file so the flag is never observed half-written.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use ip_core::onboarding::OnboardingState;
use ip_core::ports::OnboardingStatePort;

pub struct FileOnboardingStateRepository {
    path: PathBuf,
}

impl FileOnboardingStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository rooted at `base_dir` with the configured file name.
    pub fn with_base_dir(base_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: base_dir.as_ref().join(file_name),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create state dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp state failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp state to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl OnboardingStatePort for FileOnboardingStateRepository {
    async fn get_state(&self) -> Result<OnboardingState> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(OnboardingState::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read onboarding state failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(OnboardingState::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse onboarding state failed: {}", self.path.display()))
    }

    async fn set_state(&self, state: &OnboardingState) -> Result<()> {
        let content =
            serde_json::to_string_pretty(state).context("serialize onboarding state failed")?;

        self.atomic_write(&content).await
    }

    async fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("remove onboarding state failed: {}", self.path.display())),
        }
    }
}

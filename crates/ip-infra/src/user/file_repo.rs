//! File-based user record repository
//!
//! Holds the app's single user record as a JSON file. The store invariant
//! is 0 or 1 records: `current` is "the file's record or none", `upsert`
//! replaces whatever is there.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use ip_core::ports::UserRepositoryPort;
use ip_core::user::UserRecord;

pub struct FileUserRepository {
    path: PathBuf,
}

impl FileUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository rooted at `base_dir` with the configured file name.
    pub fn with_base_dir(base_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: base_dir.as_ref().join(file_name),
        }
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create user dir failed: {}", dir.display()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp user record failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp user record to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl UserRepositoryPort for FileUserRepository {
    async fn current(&self) -> Result<Option<UserRecord>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read user record failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let record = serde_json::from_str(&content)
            .with_context(|| format!("parse user record failed: {}", self.path.display()))?;
        Ok(Some(record))
    }

    async fn upsert(&self, record: &UserRecord) -> Result<()> {
        let content =
            serde_json::to_string_pretty(record).context("serialize user record failed")?;

        self.atomic_write(&content).await
    }

    async fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("remove user record failed: {}", self.path.display()))
            }
        }
    }
}

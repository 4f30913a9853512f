use std::path::PathBuf;

use anyhow::Result;

/// Per-user data directory for the app's state files.
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| anyhow::anyhow!("no platform data directory"))?;
    Ok(base.join("imanpath"))
}

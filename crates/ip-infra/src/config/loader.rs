//! Application configuration loader
//!
//! Layering: compiled defaults, then an optional config file, then
//! `IMANPATH_*` environment variables. The file is optional on purpose; a
//! fresh install runs entirely on defaults.

use std::path::Path;

use anyhow::{Context, Result};
use ip_core::config::AppConfig;

pub fn load_app_config(config_file: Option<&Path>) -> Result<AppConfig> {
    let defaults =
        config::Config::try_from(&AppConfig::default()).context("encode default config failed")?;

    let mut builder = config::Config::builder().add_source(defaults);
    if let Some(path) = config_file {
        builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("IMANPATH").separator("__"))
        .build()
        .context("assemble app config failed")?;

    settings
        .try_deserialize()
        .context("deserialize app config failed")
}

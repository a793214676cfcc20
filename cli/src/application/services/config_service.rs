//! Application service: app config use-cases.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ConfigSource;
use crate::domain::config::{AppConfig, RawAppConfig};

/// Load the app config at `path` and fill its defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded. Nothing in a run can
/// proceed without it.
pub fn load_app_config(source: &impl ConfigSource, path: &Path) -> Result<AppConfig> {
    let raw: RawAppConfig = source
        .load(path)
        .with_context(|| format!("cannot load app config {}", path.display()))?;
    let config = raw.resolve();
    tracing::debug!(
        path = %path.display(),
        dry_run = config.dry_run,
        configs_path = %config.configs_path,
        cluster = config.cluster_targets.len(),
        single = config.single_targets.len(),
        "loaded app config"
    );
    Ok(config)
}

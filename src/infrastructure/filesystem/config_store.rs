use std::path::{Path, PathBuf};
use tokio::fs as async_fs;

use crate::common::error::RackError;
use crate::common::result::{RackResult, ResultExt};
use crate::domain::entities::rack_config::RackConfig;

/// File name of the optional per-directory configuration
pub const CONFIG_FILE_NAME: &str = ".rack.yaml";

/// Loads `.rack.yaml` from a working directory
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Path of the configuration file for `working_dir`
    pub fn config_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(CONFIG_FILE_NAME)
    }

    /// Read the configuration, falling back to defaults when the file is
    /// absent or empty.
    pub async fn read_config(&self, working_dir: &Path) -> RackResult<RackConfig> {
        let config_path = self.config_path(working_dir);

        if !config_path.exists() {
            tracing::debug!("no {} in {}", CONFIG_FILE_NAME, working_dir.display());
            return Ok(RackConfig::default());
        }

        let content = async_fs::read_to_string(&config_path)
            .await
            .with_filesystem_error("Failed to read config file", Some(config_path.clone()))?;

        if content.trim().is_empty() {
            return Ok(RackConfig::default());
        }

        let config: RackConfig = serde_yaml::from_str(&content)
            .with_config_error("Invalid config file", Some(config_path.clone()))?;

        if let Some(repos) = config.configured_repos() {
            if repos.iter().any(|r| r.trim().is_empty()) {
                return Err(RackError::config_error(
                    "Repository names must not be empty",
                    Some(config_path),
                ));
            }
            tracing::info!("{} lists {} repositories", CONFIG_FILE_NAME, repos.len());
        }

        Ok(config)
    }
}

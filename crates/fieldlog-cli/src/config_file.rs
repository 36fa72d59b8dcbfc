//! Persistent remote configuration for the CLI.
//!
//! Stored as JSON under the platform config directory. Environment
//! variables override the file so CI and scripted runs never have to touch
//! it: `FIELDLOG_GITHUB_TOKEN`, `FIELDLOG_GITHUB_REPO`,
//! `FIELDLOG_GITHUB_PATH`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fieldlog_core::remote::RemoteConfig;
use fieldlog_core::util::normalize_text_option;

use crate::error::CliError;

const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_TOKEN: &str = "FIELDLOG_GITHUB_TOKEN";
pub const ENV_REPO: &str = "FIELDLOG_GITHUB_REPO";
pub const ENV_PATH: &str = "FIELDLOG_GITHUB_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteConfigFile {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub base_path: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, CliError> {
    dirs::config_dir()
        .map(|dir| dir.join("fieldlog").join(CONFIG_FILE_NAME))
        .ok_or_else(|| CliError::Config("could not resolve a config directory".to_string()))
}

impl RemoteConfigFile {
    pub fn load() -> Result<Self, CliError> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            CliError::Config(format!("failed to read {}: {}", path.display(), error))
        })?;
        let mut file = serde_json::from_str::<Self>(&raw).map_err(|error| {
            CliError::Config(format!("failed to parse {}: {}", path.display(), error))
        })?;
        file.normalize();
        Ok(file)
    }

    pub fn save(&self) -> Result<PathBuf, CliError> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                CliError::Config(format!(
                    "failed to create config directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized).map_err(|error| {
            CliError::Config(format!("failed to write {}: {}", path.display(), error))
        })
    }

    /// Resolve the effective remote configuration, environment first.
    pub fn resolve_remote(&self) -> Result<RemoteConfig, CliError> {
        resolve_remote_with_env(self, |key| std::env::var(key).ok())
    }

    fn normalize(&mut self) {
        self.token = normalize_text_option(self.token.take());
        self.repository = normalize_text_option(self.repository.take());
        self.base_path = normalize_text_option(self.base_path.take());
    }
}

pub(crate) fn resolve_remote_with_env(
    file: &RemoteConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> Result<RemoteConfig, CliError> {
    let token = normalize_text_option(env(ENV_TOKEN)).or_else(|| file.token.clone());
    let repository = normalize_text_option(env(ENV_REPO)).or_else(|| file.repository.clone());
    let base_path = normalize_text_option(env(ENV_PATH)).or_else(|| file.base_path.clone());

    let (Some(token), Some(repository)) = (token, repository) else {
        return Err(CliError::RemoteNotConfigured);
    };

    Ok(RemoteConfig::new(token, repository, base_path)?)
}

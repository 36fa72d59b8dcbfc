//! Remote store configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

/// Default repository path under which observation objects are written.
pub const DEFAULT_BASE_PATH: &str = "data/observations";

/// Credentials and target for the remote observation store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Access token used for the `Authorization: token` header
    pub token: String,
    /// Repository identifier in `owner/name` form
    pub repository: String,
    /// Path prefix for observation objects within the repository
    pub base_path: String,
}

impl RemoteConfig {
    /// Build a validated configuration.
    ///
    /// Token and repository must be non-empty and the repository must look
    /// like `owner/name`. A blank base path falls back to
    /// [`DEFAULT_BASE_PATH`].
    pub fn new(
        token: impl Into<String>,
        repository: impl Into<String>,
        base_path: Option<String>,
    ) -> Result<Self> {
        let token = normalize_text_option(Some(token.into()))
            .ok_or_else(|| Error::Config("access token must not be empty".to_string()))?;
        let repository = normalize_text_option(Some(repository.into()))
            .ok_or_else(|| Error::Config("repository must not be empty".to_string()))?;

        let mut segments = repository.splitn(2, '/');
        let owner = segments.next().unwrap_or("");
        let name = segments.next().unwrap_or("");
        if owner.is_empty() || name.is_empty() {
            return Err(Error::Config(format!(
                "repository must be in owner/name form, got {repository:?}"
            )));
        }

        let base_path = normalize_text_option(base_path)
            .map(|path| path.trim_matches('/').to_string())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        Ok(Self {
            token,
            repository,
            base_path,
        })
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RemoteConfig")
            .field("token", &"[REDACTED]")
            .field("repository", &self.repository)
            .field("base_path", &self.base_path)
            .finish()
    }
}

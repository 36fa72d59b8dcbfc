//! GitHub repository contents client.
//!
//! One observation maps to one JSON object at `{base_path}/{id}.json`.
//! Writes are SHA-conditioned: the current version token is fetched first
//! and supplied with the PUT so an update never clobbers a version we have
//! not seen. A 404 on the token fetch means the object does not exist yet,
//! which is the expected create path and not an error.

use std::time::Duration;

use base64::Engine;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Observation;
use crate::remote::{RemoteConfig, RemoteStore};
use crate::util::compact_text;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const REMOTE_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the GitHub repository contents API.
#[derive(Debug, Clone)]
pub struct GitHubContentClient {
    config: RemoteConfig,
    api_base: String,
    client: reqwest::Client,
}

impl GitHubContentClient {
    /// Build a client against the public GitHub API.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        Self::with_api_base(config, DEFAULT_API_BASE)
    }

    /// Build a client against a custom API base URL (self-hosted forges,
    /// test servers).
    pub fn with_api_base(config: RemoteConfig, api_base: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REMOTE_CALL_TIMEOUT)
            .build()?;
        Ok(Self {
            config,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Check that the configured repository is reachable with the current
    /// token. The original app exposes this as "test connection".
    pub async fn check_repository(&self) -> Result<bool> {
        let url = format!("{}/repos/{}", self.api_base, self.config.repository);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.config.token))
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Fetch the current version token (SHA) for an object path.
    ///
    /// Returns `Ok(None)` when the object does not exist yet.
    async fn fetch_sha(&self, path: &str) -> Result<Option<String>> {
        let url = self.contents_url(path);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.config.token))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(remote_error(status, &body));
        }

        let object = response.json::<ContentObject>().await?;
        Ok(Some(object.sha))
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_base, self.config.repository, path
        )
    }
}

impl RemoteStore for GitHubContentClient {
    /// One remote mutation per call: create when no version token exists,
    /// update in place otherwise.
    async fn upsert(&self, observation: &Observation) -> Result<()> {
        let path = observation.remote_path(&self.config.base_path);
        let sha = self.fetch_sha(&path).await?;

        tracing::debug!(
            id = %observation.id,
            exists = sha.is_some(),
            "upserting observation object"
        );

        let body = build_put_body(observation, sha.as_deref())?;
        let response = self
            .client
            .put(self.contents_url(&path))
            .header("Authorization", format!("token {}", self.config.token))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(remote_error(status, &body));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ContentObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Commit message recorded with each upsert.
pub(crate) fn commit_message(observation: &Observation) -> String {
    format!(
        "Add wildlife observation: {} at {}",
        observation.species,
        observation.timestamp.to_rfc3339()
    )
}

/// Build the conditional PUT payload, including the version token only when
/// the object already exists.
pub(crate) fn build_put_body(
    observation: &Observation,
    sha: Option<&str>,
) -> Result<serde_json::Value> {
    let content = serde_json::to_string_pretty(observation)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(content);

    let mut body = serde_json::json!({
        "message": commit_message(observation),
        "content": encoded,
    });
    if let Some(sha) = sha {
        body["sha"] = serde_json::Value::String(sha.to_string());
    }
    Ok(body)
}

fn remote_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|payload| payload.message)
        .map_or_else(|| compact_text(body), |message| message.trim().to_string());

    Error::Remote {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::GeoPoint;

    fn sample() -> Observation {
        Observation::new(
            "Red Fox",
            vec!["tracks".to_string()],
            "Jono",
            GeoPoint::new(45.1, -75.2, None, None).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn put_body_encodes_observation_as_base64_json() {
        let observation = sample();
        let body = build_put_body(&observation, None).unwrap();

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(body["content"].as_str().unwrap())
            .unwrap();
        let roundtripped: Observation = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(roundtripped, observation);
        assert!(body.get("sha").is_none());
    }

    #[test]
    fn put_body_includes_sha_for_existing_object() {
        let body = build_put_body(&sample(), Some("abc123")).unwrap();
        assert_eq!(body["sha"], "abc123");
    }

    #[test]
    fn put_body_is_stable_for_unchanged_observation() {
        // Caller-side idempotence: the same record always produces the same
        // payload, so repeated upserts converge to one remote object.
        let observation = sample();
        let first = build_put_body(&observation, None).unwrap();
        let second = build_put_body(&observation, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn commit_message_names_species_and_time() {
        let observation = sample();
        let message = commit_message(&observation);
        assert!(message.contains("Red Fox"));
        assert!(message.contains(&observation.timestamp.to_rfc3339()));
    }

    #[test]
    fn remote_error_prefers_api_message_field() {
        let error = remote_error(StatusCode::UNAUTHORIZED, r#"{"message":"Bad credentials"}"#);
        match error {
            Error::Remote { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn remote_error_falls_back_to_compact_body() {
        let error = remote_error(StatusCode::BAD_GATEWAY, "upstream exploded");
        match error {
            Error::Remote { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn contents_url_is_built_from_config() {
        let config = RemoteConfig::new("token", "jono/field-data", None).unwrap();
        let client = GitHubContentClient::new(config).unwrap();
        let observation = sample();
        let path = observation.remote_path(&client.config().base_path);
        assert_eq!(
            client.contents_url(&path),
            format!(
                "https://api.github.com/repos/jono/field-data/contents/data/observations/{}.json",
                observation.id
            )
        );
    }
}

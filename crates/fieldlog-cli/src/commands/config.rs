use fieldlog_core::remote::GitHubContentClient;
use fieldlog_core::util::normalize_text_option;

use crate::config_file::RemoteConfigFile;
use crate::error::CliError;

pub fn run_config_set(
    token: Option<String>,
    repo: Option<String>,
    path: Option<String>,
) -> Result<(), CliError> {
    let mut file = RemoteConfigFile::load()?;

    if let Some(token) = normalize_text_option(token) {
        file.token = Some(token);
    }
    if let Some(repo) = normalize_text_option(repo) {
        file.repository = Some(repo);
    }
    if let Some(path) = normalize_text_option(path) {
        file.base_path = Some(path);
    }

    let saved_to = file.save()?;
    println!("Config written to {}", saved_to.display());
    Ok(())
}

pub fn run_config_show() -> Result<(), CliError> {
    let file = RemoteConfigFile::load()?;
    let token = if file.token.is_some() {
        "[set]"
    } else {
        "[not set]"
    };
    println!("token:      {token}");
    println!(
        "repository: {}",
        file.repository.as_deref().unwrap_or("[not set]")
    );
    println!(
        "base path:  {}",
        file.base_path
            .as_deref()
            .unwrap_or(fieldlog_core::remote::DEFAULT_BASE_PATH)
    );
    Ok(())
}

pub async fn run_config_test() -> Result<(), CliError> {
    let remote_config = RemoteConfigFile::load()?.resolve_remote()?;
    let repository = remote_config.repository.clone();
    let client = GitHubContentClient::new(remote_config)?;

    if client.check_repository().await? {
        println!("Repository {repository} is reachable");
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "repository {repository} is not reachable with the configured token"
        )))
    }
}

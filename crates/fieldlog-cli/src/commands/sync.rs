use std::path::Path;
use std::sync::Arc;

use fieldlog_core::net::TcpProbe;
use fieldlog_core::remote::GitHubContentClient;
use fieldlog_core::sync::SyncEngine;

use crate::commands::common::open_stores;
use crate::config_file::RemoteConfigFile;
use crate::error::CliError;

pub async fn run_sync(as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let remote_config = RemoteConfigFile::load()?.resolve_remote()?;
    let client = GitHubContentClient::new(remote_config)?;

    let stores = open_stores(data_dir);
    let engine = SyncEngine::new(
        Arc::clone(&stores.records),
        Arc::clone(&stores.outbox),
        client,
        TcpProbe::default(),
    );

    let report = engine.sync_all().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.failed > 0 {
        println!(
            "Synced {} observation(s), {} failed (see `fieldlog outbox list`)",
            report.success, report.failed
        );
    } else {
        println!("Synced {} observation(s)", report.success);
    }
    Ok(())
}

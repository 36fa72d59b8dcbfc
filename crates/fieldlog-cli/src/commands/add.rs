use std::path::Path;
use std::sync::Arc;

use fieldlog_core::models::GeoPoint;
use fieldlog_core::net::TcpProbe;
use fieldlog_core::remote::GitHubContentClient;
use fieldlog_core::services::{CaptureService, ObservationDraft};
use fieldlog_core::sync::SyncEngine;
use fieldlog_core::Error;

use crate::commands::common::{open_stores, Stores};
use crate::config_file::RemoteConfigFile;
use crate::error::CliError;

pub struct AddArgs {
    pub species: String,
    pub items: Vec<String>,
    pub enumerator: Option<String>,
    pub location: String,
    pub accuracy: Option<f64>,
    pub altitude: Option<f64>,
}

pub async fn run_add(args: AddArgs, data_dir: &Path) -> Result<(), CliError> {
    let point = GeoPoint::parse_lat_lon(&args.location)?;
    let location = GeoPoint::new(point.latitude, point.longitude, args.accuracy, args.altitude)?;

    let stores = open_stores(data_dir);
    let capture = CaptureService::new(
        Arc::clone(&stores.records),
        Arc::clone(&stores.outbox),
        Arc::clone(&stores.settings),
    );

    let observation = capture
        .save(ObservationDraft {
            species: args.species,
            items: args.items,
            enumerator: args.enumerator,
            location,
        })
        .await?;

    println!("{}", observation.id);

    try_auto_sync(&stores).await?;
    Ok(())
}

/// Best-effort sync right after a save. Being offline, unconfigured, or
/// already syncing just leaves the record queued; only local store faults
/// propagate.
async fn try_auto_sync(stores: &Stores) -> Result<(), CliError> {
    let remote_config = match RemoteConfigFile::load()?.resolve_remote() {
        Ok(config) => config,
        Err(CliError::RemoteNotConfigured) => {
            tracing::debug!("remote not configured, observation stays queued");
            return Ok(());
        }
        Err(error) => return Err(error),
    };

    let client = GitHubContentClient::new(remote_config)?;
    let engine = SyncEngine::new(
        Arc::clone(&stores.records),
        Arc::clone(&stores.outbox),
        client,
        TcpProbe::default(),
    );

    match engine.sync_all().await {
        Ok(report) => {
            if report.failed > 0 {
                println!(
                    "Synced {} observation(s), {} failed (see `fieldlog outbox list`)",
                    report.success, report.failed
                );
            } else if report.success > 0 {
                println!("Synced {} observation(s)", report.success);
            }
            Ok(())
        }
        Err(Error::Offline | Error::SyncBusy) => {
            println!("Saved offline; queued for sync");
            Ok(())
        }
        Err(error @ (Error::Config(_) | Error::Remote { .. } | Error::Http(_))) => {
            println!("Saved; sync skipped: {error}");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

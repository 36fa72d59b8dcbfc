//! Fieldlog CLI - capture wildlife observations from the command line
//!
//! Records are saved locally first and queued in an outbox; sync to the
//! remote repository is best-effort and can be retried any time.

mod cli;
mod commands;
mod config_file;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands, ConfigCommands, OutboxCommands};
use crate::commands::add::{run_add, AddArgs};
use crate::commands::common::resolve_data_dir;
use crate::commands::config::{run_config_set, run_config_show, run_config_test};
use crate::commands::list::run_list;
use crate::commands::outbox::{run_outbox_list, run_outbox_remove};
use crate::commands::species::run_species;
use crate::commands::sync::run_sync;
use crate::error::CliError;

/// Default log filter: info-level events from both fieldlog crates unless
/// overridden through the environment.
fn default_log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("fieldlog_core=info".parse().unwrap())
        .add_directive("fieldlog_cli=info".parse().unwrap())
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(default_log_filter())
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Commands::Add {
            species,
            items,
            enumerator,
            location,
            accuracy,
            altitude,
        } => {
            run_add(
                AddArgs {
                    species,
                    items,
                    enumerator,
                    location,
                    accuracy,
                    altitude,
                },
                &data_dir,
            )
            .await?;
        }
        Commands::List { unsynced, json } => run_list(unsynced, json, &data_dir).await?,
        Commands::Outbox { command } => match command {
            OutboxCommands::List { json } => run_outbox_list(json, &data_dir).await?,
            OutboxCommands::Remove { id } => run_outbox_remove(&id, &data_dir).await?,
        },
        Commands::Sync { json } => run_sync(json, &data_dir).await?,
        Commands::Config { command } => match command {
            ConfigCommands::Set { token, repo, path } => run_config_set(token, repo, path)?,
            ConfigCommands::Show => run_config_show()?,
            ConfigCommands::Test => run_config_test().await?,
        },
        Commands::Species => run_species(),
    }

    Ok(())
}

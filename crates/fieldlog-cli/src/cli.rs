use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fieldlog")]
#[command(about = "Capture wildlife observations in the field, sync when you can")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the local data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new observation
    #[command(alias = "new")]
    Add {
        /// Observed species
        #[arg(short, long)]
        species: String,
        /// Additional item noted alongside the sighting (repeatable)
        #[arg(short, long = "item", value_name = "TEXT")]
        items: Vec<String>,
        /// Recorder name (defaults to the last-used name)
        #[arg(short, long)]
        enumerator: Option<String>,
        /// GPS fix as "lat,lon"
        #[arg(short, long, value_name = "LAT,LON")]
        location: String,
        /// Horizontal accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
        /// Altitude in meters
        #[arg(long)]
        altitude: Option<f64>,
    },
    /// List recorded observations
    List {
        /// Only show observations not yet synced
        #[arg(long)]
        unsynced: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect the pending sync queue
    Outbox {
        #[command(subcommand)]
        command: OutboxCommands,
    },
    /// Push all unsynced observations to the remote repository
    Sync {
        /// Output the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configure the remote repository
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print the common species list
    Species,
}

#[derive(Subcommand)]
pub enum OutboxCommands {
    /// List queued items with retry counts and last errors
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Unqueue an observation (keeps the observation itself)
    Remove {
        /// Observation ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Set remote credentials and target repository
    Set {
        /// GitHub access token
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
        /// Repository in owner/name form
        #[arg(long, value_name = "OWNER/NAME")]
        repo: Option<String>,
        /// Path prefix for observation objects
        #[arg(long, value_name = "PATH")]
        path: Option<String>,
    },
    /// Show the stored remote configuration (token redacted)
    Show,
    /// Check that the configured repository is reachable
    Test,
}

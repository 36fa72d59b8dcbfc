use std::path::Path;

use crate::commands::common::{
    format_observation_lines, observation_to_list_item, open_stores, ObservationListItem,
};
use crate::error::CliError;

pub async fn run_list(unsynced_only: bool, as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let stores = open_stores(data_dir);
    let observations = if unsynced_only {
        stores.records.get_unsynced().await?
    } else {
        stores.records.get_all().await?
    };

    if as_json {
        let json_items = observations
            .iter()
            .map(observation_to_list_item)
            .collect::<Vec<ObservationListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    if observations.is_empty() {
        println!("No observations recorded.");
        return Ok(());
    }

    for line in format_observation_lines(&observations) {
        println!("{line}");
    }
    Ok(())
}

use std::path::Path;

use crate::commands::common::{
    format_outbox_lines, open_stores, outbox_to_list_items, parse_observation_id,
};
use crate::error::CliError;

pub async fn run_outbox_list(as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let stores = open_stores(data_dir);
    let items = stores.outbox.get_all().await?;
    let records = stores.records.get_all().await?;
    let list_items = outbox_to_list_items(&items, &records);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&list_items)?);
        return Ok(());
    }

    if list_items.is_empty() {
        println!("Outbox is empty.");
        return Ok(());
    }

    for line in format_outbox_lines(&list_items) {
        println!("{line}");
    }
    Ok(())
}

/// Unqueues the observation; the record itself is kept.
pub async fn run_outbox_remove(id: &str, data_dir: &Path) -> Result<(), CliError> {
    let observation_id = parse_observation_id(id)?;
    let stores = open_stores(data_dir);
    stores.outbox.remove(observation_id).await?;
    println!("Removed {observation_id} from outbox");
    Ok(())
}

use std::path::PathBuf;

use fieldlog_core::models::{GeoPoint, Observation, ObservationId, OutboxItem};
use pretty_assertions::assert_eq;

use crate::commands::common::{
    format_observation_lines, format_outbox_lines, observation_to_list_item, outbox_to_list_items,
    parse_observation_id, resolve_data_dir,
};

#[test]
fn default_log_filter_covers_both_crates() {
    let rendered = crate::default_log_filter().to_string();
    assert!(rendered.contains("fieldlog_core=info"));
    assert!(rendered.contains("fieldlog_cli=info"));
}

fn sample_observation() -> Observation {
    Observation::new(
        "Red Fox",
        vec!["tracks".to_string()],
        "Jono",
        GeoPoint::new(45.1, -75.2, None, None).unwrap(),
    )
    .unwrap()
}

#[test]
fn resolve_data_dir_prefers_explicit_path() {
    let resolved = resolve_data_dir(Some(PathBuf::from("/tmp/fieldlog-test"))).unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/fieldlog-test"));
}

#[test]
fn parse_observation_id_accepts_valid_uuid() {
    let id = ObservationId::new();
    assert_eq!(parse_observation_id(&format!(" {id} ")).unwrap(), id);
}

#[test]
fn parse_observation_id_rejects_garbage() {
    assert!(parse_observation_id("not-an-id").is_err());
    assert!(parse_observation_id("").is_err());
}

#[test]
fn observation_list_item_carries_key_fields() {
    let observation = sample_observation();
    let item = observation_to_list_item(&observation);
    assert_eq!(item.id, observation.id.as_str());
    assert_eq!(item.species, "Red Fox");
    assert!(!item.synced);
    assert!(item.timestamp.contains('T'));
}

#[test]
fn observation_lines_show_sync_status() {
    let mut observation = sample_observation();
    let lines = format_observation_lines(std::slice::from_ref(&observation));
    assert!(lines[0].contains("[queued]"));
    assert!(lines[0].contains("Red Fox"));

    observation.synced = true;
    let lines = format_observation_lines(&[observation]);
    assert!(lines[0].contains("[synced]"));
}

#[test]
fn outbox_items_join_species_and_last_error() {
    let mut observation = sample_observation();
    observation.sync_error = Some("Remote error (401): Bad credentials".to_string());
    let item = OutboxItem::new(observation.id);

    let list_items = outbox_to_list_items(&[item], std::slice::from_ref(&observation));
    assert_eq!(list_items.len(), 1);
    assert_eq!(list_items[0].species.as_deref(), Some("Red Fox"));
    assert_eq!(
        list_items[0].last_error.as_deref(),
        Some("Remote error (401): Bad credentials")
    );

    let lines = format_outbox_lines(&list_items);
    assert!(lines[0].contains("retries=0"));
    assert!(lines[0].contains("Bad credentials"));
}

#[test]
fn outbox_items_tolerate_missing_record() {
    let item = OutboxItem::new(ObservationId::new());
    let list_items = outbox_to_list_items(&[item], &[]);
    assert!(list_items[0].species.is_none());

    let lines = format_outbox_lines(&list_items);
    assert!(lines[0].contains("<missing record>"));
}

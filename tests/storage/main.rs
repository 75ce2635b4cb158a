//! Persistence integration tests: documents on disk and startup loading.

#[path = "../support/mod.rs"]
mod support;

use std::fs;

use buyerbook::config::UserPrefs;
use buyerbook::model::RecordsExt;
use buyerbook::record::{Buyer, MeetUp};
use buyerbook::storage::{sample_buyers, StorageError, StorageManager};
use serde_json::json;
use tempfile::TempDir;

use support::*;

fn storage() -> (TempDir, StorageManager, UserPrefs) {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageManager::new(dir.path().join("preferences.json"));
    let prefs = UserPrefs::in_dir(dir.path());
    storage.save_user_prefs(&prefs).unwrap();
    (dir, storage, prefs)
}

#[test]
fn saved_lists_load_back_equal() {
    let (_dir, storage, prefs) = storage();

    storage
        .save_buyers(prefs.buyer_list_file_path(), &typical_buyers())
        .unwrap();
    storage
        .save_meet_ups(prefs.meet_up_list_file_path(), &typical_meet_ups())
        .unwrap();

    let model = storage.load_model();
    assert_eq!(model.records::<Buyer>().records(), typical_buyers().as_slice());
    assert_eq!(model.records::<MeetUp>().records(), typical_meet_ups().as_slice());
}

#[test]
fn document_layout_is_stable() {
    let (_dir, storage, prefs) = storage();
    storage
        .save_buyers(prefs.buyer_list_file_path(), &[benson()])
        .unwrap();
    storage
        .save_meet_ups(prefs.meet_up_list_file_path(), &[pitch()])
        .unwrap();

    let buyers: serde_json::Value =
        serde_json::from_slice(&fs::read(prefs.buyer_list_file_path()).unwrap()).unwrap();
    assert_eq!(
        buyers,
        json!({
            "buyers": [{
                "name": "Benson Meier",
                "phone": "98765432",
                "email": "johnd@example.com",
                "address": "311, Clementi Ave 2, #02-25",
                "buyerType": "seller",
                "tags": ["friends", "owesMoney"]
            }]
        })
    );

    let meet_ups: serde_json::Value =
        serde_json::from_slice(&fs::read(prefs.meet_up_list_file_path()).unwrap()).unwrap();
    assert_eq!(
        meet_ups,
        json!({
            "meetUps": [{
                "name": "Sales Pitch",
                "info": "Pitching property at Bukit Timah.",
                "from": "2024-09-11 12:00",
                "to": "2024-09-11 12:59"
            }]
        })
    );
}

#[test]
fn invalid_record_in_file_is_reported() {
    let (_dir, storage, prefs) = storage();
    fs::write(
        prefs.buyer_list_file_path(),
        json!({
            "buyers": [{
                "name": "R@chel",
                "phone": "94351253",
                "email": "alice@example.com",
                "address": "123, Jurong West Ave 6",
                "buyerType": "buyer",
                "tags": []
            }]
        })
        .to_string(),
    )
    .unwrap();

    let err = storage
        .read_buyers(prefs.buyer_list_file_path())
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidField(_)));
}

#[test]
fn missing_field_in_file_is_reported() {
    let (_dir, storage, prefs) = storage();
    fs::write(
        prefs.meet_up_list_file_path(),
        r#"{ "meetUps": [ { "name": "Sales Pitch", "info": "x", "from": "2024-09-11 12:00" } ] }"#,
    )
    .unwrap();

    let err = storage
        .read_meet_ups(prefs.meet_up_list_file_path())
        .unwrap_err();
    assert_eq!(err.to_string(), "MeetUp's To field is missing!");
}

#[test]
fn duplicate_buyers_in_file_are_rejected() {
    let (_dir, storage, prefs) = storage();
    let twin = BuyerBuilder::from_buyer(&alice()).phone("11111111").build();
    storage
        .save_buyers(prefs.buyer_list_file_path(), &[alice(), twin])
        .unwrap();

    let err = storage
        .read_buyers(prefs.buyer_list_file_path())
        .unwrap_err();
    assert_eq!(err.to_string(), "Buyers list contains duplicate buyer(s).");

    let model = storage.load_model();
    assert!(model.records::<Buyer>().is_empty());
}

#[test]
fn first_launch_uses_sample_data() {
    let (_dir, storage, _prefs) = storage();
    let model = storage.load_model();
    assert_eq!(model.records::<Buyer>().records(), sample_buyers().as_slice());
}

#[test]
fn empty_file_counts_as_missing() {
    let (_dir, storage, prefs) = storage();
    fs::write(prefs.meet_up_list_file_path(), "").unwrap();
    assert_eq!(
        storage.read_meet_ups(prefs.meet_up_list_file_path()).unwrap(),
        None
    );
}

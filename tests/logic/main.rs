//! End-to-end tests: text in, feedback out, files on disk.

#[path = "../support/mod.rs"]
mod support;

use std::path::Path;

use buyerbook::config::UserPrefs;
use buyerbook::field::Phone;
use buyerbook::logic::{LogicError, LogicManager};
use buyerbook::model::ModelManager;
use buyerbook::parser::ParseError;
use buyerbook::record::{Buyer, MeetUp};
use buyerbook::storage::StorageManager;

use support::*;

fn logic(dir: &Path) -> LogicManager {
    let storage = StorageManager::new(dir.join("preferences.json"));
    let model = ModelManager::new(typical_buyers(), typical_meet_ups(), UserPrefs::in_dir(dir));
    LogicManager::new(model, storage)
}

fn reload(dir: &Path) -> (Vec<Buyer>, Vec<MeetUp>) {
    let storage = StorageManager::new(dir.join("preferences.json"));
    let prefs = UserPrefs::in_dir(dir);
    (
        storage
            .read_buyers(prefs.buyer_list_file_path())
            .unwrap()
            .unwrap(),
        storage
            .read_meet_ups(prefs.meet_up_list_file_path())
            .unwrap()
            .unwrap(),
    )
}

#[test]
fn edit_by_text_persists() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    let result = logic
        .execute("edit 1 p/91234567 e/johndoe@example.com")
        .unwrap();
    assert!(result.feedback.starts_with("Edited Buyer: Alice Pauline; Phone: 91234567"));

    let (buyers, meet_ups) = reload(dir.path());
    assert_eq!(buyers[0].phone(), &Phone::parse("91234567").unwrap());
    assert_eq!(meet_ups, typical_meet_ups());
}

#[test]
fn empty_edit_is_rejected_before_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    let err = logic.execute("edit 1").unwrap_err();
    assert_eq!(err.to_string(), "At least one field to edit must be provided.");

    let err = logic.execute("editm 1").unwrap_err();
    assert_eq!(err.to_string(), "Please check for missing fields or invalid format.");
    assert!(!logic.buyer_list_file_path().exists());
}

#[test]
fn meet_up_collision_by_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    let err = logic
        .execute(&format!(
            "editm 1 n/{NETWORKING_NAME} f/{NETWORKING_FROM} t/{NETWORKING_TO}"
        ))
        .unwrap_err();
    assert!(matches!(err, LogicError::Command(_)));
    assert_eq!(logic.filtered_meet_ups().len(), typical_meet_ups().len());
}

#[test]
fn find_then_delete_uses_the_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    assert_eq!(logic.execute("find Meier").unwrap().feedback, "2 buyers listed!");
    assert_eq!(logic.filtered_buyers(), vec![&benson(), &daniel()]);

    logic.execute("delete 2").unwrap();
    let (buyers, _) = reload(dir.path());
    assert_eq!(buyers, vec![alice(), benson(), carl()]);
}

#[test]
fn add_meet_up_by_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    let result = logic
        .execute("addm n/Lunch i/Discuss terms f/2024-11-01 12:00 t/2024-11-01 13:00")
        .unwrap();
    assert_eq!(
        result.feedback,
        "New meet-up added: Lunch; Info: Discuss terms; From: 2024-11-01 12:00; To: 2024-11-01 13:00"
    );
    assert_eq!(reload(dir.path()).1.len(), typical_meet_ups().len() + 1);
}

#[test]
fn parse_errors_surface_their_message() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    let err = logic.execute("add n/Bob").unwrap_err();
    assert!(matches!(err, LogicError::Parse(ParseError::InvalidFormat { .. })));
    assert!(err.to_string().starts_with("Invalid command format! \nadd: "));

    let err = logic.execute("delete 0").unwrap_err();
    assert!(err.to_string().starts_with("Invalid command format! \ndelete: "));

    let err = logic.execute("edit 1 p/12").unwrap_err();
    assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
}

#[test]
fn exit_and_help_flags() {
    let dir = tempfile::tempdir().unwrap();
    let mut logic = logic(dir.path());

    assert!(logic.execute("help").unwrap().show_help);
    assert!(logic.execute("exit").unwrap().exit);
}

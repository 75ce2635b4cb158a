//! Edit commands: resolution, duplicate detection and index bounds.

use buyerbook::command::{Command, CommandError, EditCommand, Index};
use buyerbook::edit::{EditBuyerDescriptor, EditMeetUpDescriptor};
use buyerbook::field::{self, Email, MeetUpName, Name, Phone, Tag};
use buyerbook::model::{ContainsKeywords, ModelManager, RecordsExt};
use buyerbook::record::{Buyer, MeetUp, Record};
use buyerbook::config::UserPrefs;

use crate::support::*;

fn first() -> Index {
    Index::from_zero_based(0)
}

// ============================================================================
// Buyers
// ============================================================================

#[test]
fn edit_changes_only_the_given_fields() {
    let amy = BuyerBuilder::default()
        .name("Amy Bee")
        .phone("11111111")
        .email("amy@example.com")
        .address("Block 312, Amy Street 1")
        .buyer_type("seller")
        .tags(&["friend"])
        .build();
    let mut model = ModelManager::new(vec![amy.clone()], Vec::new(), UserPrefs::default());

    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_phone(Phone::parse("91234567").unwrap());
    descriptor.set_email(Email::parse("johndoe@example.com").unwrap());

    let result = EditCommand::new(first(), descriptor).execute(&mut model).unwrap();

    let expected = BuyerBuilder::from_buyer(&amy)
        .phone("91234567")
        .email("johndoe@example.com")
        .build();
    assert_eq!(model.records::<Buyer>().records(), [expected.clone()]);
    assert_eq!(
        result.feedback,
        "Edited Buyer: Amy Bee; Phone: 91234567; Email: johndoe@example.com; \
Address: Block 312, Amy Street 1; Type: seller; Tags: [friend]"
    );
    assert_eq!(result.feedback, format!("Edited Buyer: {}", expected.describe()));
}

#[test]
fn edit_with_every_field_replaces_the_record() {
    let mut model = typical_model();
    let edited = bob();

    let result = EditCommand::new(first(), descriptor_for_buyer(&edited))
        .execute(&mut model)
        .unwrap();

    assert_eq!(model.records::<Buyer>().records()[0], edited);
    assert_eq!(model.records::<Buyer>().len(), typical_buyers().len());
    assert_eq!(result.feedback, format!("Edited Buyer: {edited}"));
}

#[test]
fn edit_keeping_own_name_is_not_a_duplicate() {
    let mut model = typical_model();
    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_name(alice().name().clone());
    descriptor.set_tags(&[Tag::parse("vip").unwrap()]);

    EditCommand::new(first(), descriptor).execute(&mut model).unwrap();

    let edited = &model.records::<Buyer>().records()[0];
    assert_eq!(edited.name(), alice().name());
    assert_eq!(edited.tags().len(), 1);
}

#[test]
fn edit_clearing_tags_leaves_an_empty_set() {
    let mut model = typical_model();
    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_tags(Vec::<&Tag>::new());

    EditCommand::new(Index::from_zero_based(1), descriptor)
        .execute(&mut model)
        .unwrap();

    assert!(model.records::<Buyer>().records()[1].tags().is_empty());
}

#[test]
fn edit_into_another_buyers_name_is_rejected() {
    let mut model = typical_model();
    let before = model.records::<Buyer>().clone();

    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_name(Name::parse("Benson Meier").unwrap());

    let err = EditCommand::new(first(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert!(matches!(err, CommandError::DuplicateRecord { kind: "buyer", .. }));
    assert_eq!(err.to_string(), "This buyer already exists in the address book.");
    assert_eq!(model.records::<Buyer>().records(), before.records());
}

#[test]
fn edit_in_filtered_view_uses_view_position() {
    let mut model = typical_model();
    model
        .records_mut::<Buyer>()
        .set_filter(ContainsKeywords::new(["Meier"]).into_filter());
    assert_eq!(model.records::<Buyer>().filtered_len(), 2);

    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_phone(Phone::parse("99999999").unwrap());
    EditCommand::new(Index::from_zero_based(1), descriptor)
        .execute(&mut model)
        .unwrap();

    let buyers = model.records::<Buyer>();
    assert_eq!(buyers.records()[3].name(), daniel().name());
    assert_eq!(buyers.records()[3].phone().as_str(), "99999999");
    assert!(buyers.filter().is_show_all());
}

#[test]
fn edit_in_filtered_view_cannot_reach_hidden_records() {
    let mut model = typical_model();
    model
        .records_mut::<Buyer>()
        .set_filter(ContainsKeywords::new(["Alice"]).into_filter());

    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_name(Name::parse(VALID_NAME_BOB).unwrap());
    let err = EditCommand::new(Index::from_zero_based(1), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err.to_string(), "The buyer index provided is invalid");
}

#[test]
fn edit_at_view_boundary() {
    let mut descriptor = EditBuyerDescriptor::new();
    descriptor.set_phone(Phone::parse("12345678").unwrap());
    let size = typical_buyers().len();

    let mut model = typical_model();
    let err = EditCommand::new(Index::from_zero_based(size), descriptor.clone())
        .execute(&mut model)
        .unwrap_err();
    assert!(matches!(err, CommandError::IndexOutOfRange { kind: "buyer", .. }));

    EditCommand::new(Index::from_zero_based(size - 1), descriptor)
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.records::<Buyer>().records()[size - 1].phone().as_str(), "12345678");
}

// ============================================================================
// Meet-ups
// ============================================================================

#[test]
fn edit_meet_up_into_another_slot_is_rejected() {
    let mut model = ModelManager::new(Vec::new(), vec![pitch(), networking()], UserPrefs::default());
    let before = model.records::<MeetUp>().clone();

    let mut descriptor = EditMeetUpDescriptor::new();
    descriptor.set_name(MeetUpName::parse(NETWORKING_NAME).unwrap());
    descriptor.set_from(field::From::parse(NETWORKING_FROM).unwrap());
    descriptor.set_to(field::To::parse(NETWORKING_TO).unwrap());

    let err = EditCommand::new(first(), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert!(matches!(err, CommandError::DuplicateRecord { kind: "meet-up", .. }));
    assert_eq!(err.to_string(), "This meet-up already exists in the meet-up list.");
    assert_eq!(model.records::<MeetUp>().records(), before.records());
}

#[test]
fn edit_meet_up_name_only_keeps_its_slot_distinct() {
    let mut model = ModelManager::new(Vec::new(), vec![pitch(), networking()], UserPrefs::default());

    let mut descriptor = EditMeetUpDescriptor::new();
    descriptor.set_name(MeetUpName::parse(NETWORKING_NAME).unwrap());

    let result = EditCommand::new(first(), descriptor)
        .execute(&mut model)
        .unwrap();

    let edited = &model.records::<MeetUp>().records()[0];
    assert_eq!(edited.name().as_str(), NETWORKING_NAME);
    assert_eq!(edited.from(), pitch().from());
    assert_eq!(result.feedback, format!("Edited meet-up: {edited}"));
}

#[test]
fn edit_meet_up_info_never_collides() {
    let mut model = typical_model();
    let mut descriptor = descriptor_for_meet_up(&pitch());
    descriptor.set_info(buyerbook::field::Info::parse("Bring brochures.").unwrap());

    EditCommand::new(first(), descriptor)
        .execute(&mut model)
        .unwrap();

    let edited = &model.records::<MeetUp>().records()[0];
    assert!(edited.is_same(&pitch()));
    assert_ne!(edited, &pitch());
}

#[test]
fn edit_meet_up_out_of_filtered_range_leaves_state_alone() {
    let mut model = typical_model();
    model
        .records_mut::<MeetUp>()
        .set_filter(ContainsKeywords::new(["Sales", "Networking", "Condo"]).into_filter());
    let before = model.records::<MeetUp>().clone();
    let shown_before: Vec<MeetUp> = before.filtered().into_iter().cloned().collect();
    assert_eq!(shown_before.len(), 3);

    let mut descriptor = EditMeetUpDescriptor::new();
    descriptor.set_name(MeetUpName::parse("Anything").unwrap());
    let err = EditCommand::new(Index::from_zero_based(5), descriptor)
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err.to_string(), "The meet-up index provided is invalid");
    let after = model.records::<MeetUp>();
    assert_eq!(after.records(), before.records());
    let shown_after: Vec<MeetUp> = after.filtered().into_iter().cloned().collect();
    assert_eq!(shown_after, shown_before);
    assert!(!after.filter().is_show_all());
}

use buyerbook::command::{Command, DeleteCommand, Index};
use buyerbook::model::{ContainsKeywords, RecordsExt};
use buyerbook::record::{Buyer, MeetUp};

use crate::support::*;

#[test]
fn delete_removes_from_shown_position() {
    let mut model = typical_model();
    model
        .records_mut::<Buyer>()
        .set_filter(ContainsKeywords::new(["Meier"]).into_filter());

    let result = DeleteCommand::<Buyer>::new(Index::from_zero_based(1))
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.feedback, format!("Deleted Buyer: {}", daniel()));
    let buyers = model.records::<Buyer>();
    assert_eq!(buyers.records(), [alice(), benson(), carl()]);
    assert_eq!(buyers.filtered_len(), 1);
}

#[test]
fn delete_past_the_end_fails() {
    let mut model = typical_model();
    let err = DeleteCommand::<MeetUp>::new(Index::from_zero_based(typical_meet_ups().len()))
        .execute(&mut model)
        .unwrap_err();

    assert_eq!(err.to_string(), "The meet-up index provided is invalid");
    assert_eq!(model.records::<MeetUp>().len(), typical_meet_ups().len());
}

#[test]
fn delete_last_meet_up() {
    let mut model = typical_model();
    let result = DeleteCommand::<MeetUp>::new(Index::from_zero_based(2))
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.feedback, format!("Deleted meet-up: {}", viewing()));
    assert_eq!(model.records::<MeetUp>().records(), [pitch(), networking()]);
}

use buyerbook::command::{Command, ExitCommand, FindCommand, HelpCommand, ListCommand};
use buyerbook::model::{ContainsKeywords, RecordsExt};
use buyerbook::record::{Buyer, MeetUp};

use crate::support::*;

#[test]
fn find_matches_whole_words_ignoring_case() {
    let mut model = typical_model();
    let result = FindCommand::<Buyer>::new(ContainsKeywords::new(["meier", "kurz"]))
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.feedback, "3 buyers listed!");
    let shown: Vec<&Buyer> = model.records::<Buyer>().filtered();
    assert_eq!(shown, vec![&benson(), &carl(), &daniel()]);
}

#[test]
fn find_with_no_match_shows_nothing() {
    let mut model = typical_model();
    let result = FindCommand::<MeetUp>::new(ContainsKeywords::new(["Sale"]))
        .execute(&mut model)
        .unwrap();

    assert_eq!(result.feedback, "0 meet-ups listed!");
    assert!(model.records::<MeetUp>().filtered().is_empty());
}

#[test]
fn list_clears_the_search() {
    let mut model = typical_model();
    FindCommand::<MeetUp>::new(ContainsKeywords::new(["pitch"]))
        .execute(&mut model)
        .unwrap();
    assert_eq!(model.records::<MeetUp>().filtered_len(), 1);

    let result = ListCommand::<MeetUp>::new().execute(&mut model).unwrap();
    assert_eq!(result.feedback, "Listed all meet-ups");
    assert_eq!(model.records::<MeetUp>().filtered_len(), typical_meet_ups().len());
}

#[test]
fn searches_are_independent_per_kind() {
    let mut model = typical_model();
    FindCommand::<Buyer>::new(ContainsKeywords::new(["Alice"]))
        .execute(&mut model)
        .unwrap();

    assert_eq!(model.records::<Buyer>().filtered_len(), 1);
    assert_eq!(model.records::<MeetUp>().filtered_len(), typical_meet_ups().len());
}

#[test]
fn help_and_exit_only_signal() {
    let mut model = typical_model();

    let help = HelpCommand.execute(&mut model).unwrap();
    assert!(help.show_help && !help.exit);

    let exit = ExitCommand.execute(&mut model).unwrap();
    assert!(exit.exit && !exit.show_help);
    assert_eq!(exit.feedback, "Exiting buyerbook as requested ...");
    assert_eq!(model.records::<Buyer>().records(), typical_buyers().as_slice());
}

//! User-facing wording for each record kind.

use crate::record::{Buyer, MeetUp, Record};

pub trait RecordMessages: Record {
    const ADDED: &'static str;
    const EDITED: &'static str;
    const DELETED: &'static str;
    const DUPLICATE: &'static str;
    const NOT_EDITED: &'static str;
    const INVALID_INDEX: &'static str;
    const LISTED_ALL: &'static str;
    /// Plural noun used in search summaries.
    const PLURAL: &'static str;

    fn listed_overview(count: usize) -> String {
        format!("{} {} listed!", count, Self::PLURAL)
    }
}

impl RecordMessages for Buyer {
    const ADDED: &'static str = "New buyer added";
    const EDITED: &'static str = "Edited Buyer";
    const DELETED: &'static str = "Deleted Buyer";
    const DUPLICATE: &'static str = "This buyer already exists in the address book.";
    const NOT_EDITED: &'static str = "At least one field to edit must be provided.";
    const INVALID_INDEX: &'static str = "The buyer index provided is invalid";
    const LISTED_ALL: &'static str = "Listed all buyers";
    const PLURAL: &'static str = "buyers";
}

impl RecordMessages for MeetUp {
    const ADDED: &'static str = "New meet-up added";
    const EDITED: &'static str = "Edited meet-up";
    const DELETED: &'static str = "Deleted meet-up";
    const DUPLICATE: &'static str = "This meet-up already exists in the meet-up list.";
    const NOT_EDITED: &'static str = "Please check for missing fields or invalid format.";
    const INVALID_INDEX: &'static str = "The meet-up index provided is invalid";
    const LISTED_ALL: &'static str = "Listed all meet-ups";
    const PLURAL: &'static str = "meet-ups";
}

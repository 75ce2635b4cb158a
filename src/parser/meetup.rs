//! Grammar of the meet-up commands. Words carry an `m` suffix.

use super::*;

const ALL_PREFIXES: [Prefix; 4] = [PREFIX_NAME, PREFIX_INFO, PREFIX_FROM, PREFIX_TO];

pub mod add {
    use super::*;
    use crate::command::AddCommand;
    use crate::field::{self, Info, MeetUpName};
    use crate::record::MeetUp;

    pub const COMMAND: &str = "addm";
    pub const USAGE: &str = "addm: Adds a meet-up to the meet-up list. \
Parameters: n/NAME i/INFO f/FROM t/TO\n\
Example: addm n/Sales Pitch i/Pitch the condo to Alex f/2024-09-11 12:00 t/2024-09-11 12:59";

    pub fn parse(args: &str) -> Result<AddCommand<MeetUp>, ParseError> {
        let map = tokenize(args, &ALL_PREFIXES);
        if !map.are_present(&ALL_PREFIXES) || !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage: USAGE });
        }
        map.verify_no_duplicate_prefixes(&ALL_PREFIXES)?;

        let value = |prefix| map.value(prefix).unwrap_or_default();
        let meet_up = MeetUp::new(
            MeetUpName::parse(value(PREFIX_NAME))?,
            Info::parse(value(PREFIX_INFO))?,
            field::From::parse(value(PREFIX_FROM))?,
            field::To::parse(value(PREFIX_TO))?,
        );
        Ok(AddCommand::new(meet_up))
    }
}

pub mod edit {
    use super::*;
    use crate::command::{EditCommand, RecordMessages};
    use crate::edit::{Descriptor, EditMeetUpDescriptor};
    use crate::field::{self, Info, MeetUpName};
    use crate::record::MeetUp;

    pub const COMMAND: &str = "editm";
    pub const USAGE: &str = "editm: Edits the details of the meet-up identified by the index number \
used in the displayed meet-up list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [i/INFO] [f/FROM] [t/TO]\n\
Example: editm 1 i/Bring the floor plan f/2024-09-11 13:00";

    pub fn parse(args: &str) -> Result<EditCommand<EditMeetUpDescriptor>, ParseError> {
        let map = tokenize(args, &ALL_PREFIXES);
        let index =
            parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat { usage: USAGE })?;
        map.verify_no_duplicate_prefixes(&ALL_PREFIXES)?;

        let mut descriptor = EditMeetUpDescriptor::new();
        if let Some(raw) = map.value(PREFIX_NAME) {
            descriptor.set_name(MeetUpName::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_INFO) {
            descriptor.set_info(Info::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_FROM) {
            descriptor.set_from(field::From::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_TO) {
            descriptor.set_to(field::To::parse(raw)?);
        }

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NotEdited(<MeetUp as RecordMessages>::NOT_EDITED));
        }
        Ok(EditCommand::new(index, descriptor))
    }
}

pub mod delete {
    use super::*;
    use crate::command::DeleteCommand;
    use crate::record::MeetUp;

    pub const COMMAND: &str = "deletem";
    pub const USAGE: &str = "deletem: Deletes the meet-up identified by the index number used in the displayed meet-up list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deletem 1";

    pub fn parse(args: &str) -> Result<DeleteCommand<MeetUp>, ParseError> {
        parse_index(args)
            .map(DeleteCommand::new)
            .map_err(|_| ParseError::InvalidFormat { usage: USAGE })
    }
}

pub mod list {
    use super::*;
    use crate::command::ListCommand;
    use crate::record::MeetUp;

    pub const COMMAND: &str = "listm";
    pub const USAGE: &str = "listm: Lists all meet-ups.";

    pub fn parse(_args: &str) -> Result<ListCommand<MeetUp>, ParseError> {
        Ok(ListCommand::new())
    }
}

pub mod find {
    use super::*;
    use crate::command::FindCommand;
    use crate::model::ContainsKeywords;
    use crate::record::MeetUp;

    pub const COMMAND: &str = "findm";
    pub const USAGE: &str = "findm: Finds all meet-ups whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findm pitch viewing";

    pub fn parse(args: &str) -> Result<FindCommand<MeetUp>, ParseError> {
        let keywords: Vec<&str> = args.split_whitespace().collect();
        if keywords.is_empty() {
            return Err(ParseError::InvalidFormat { usage: USAGE });
        }
        Ok(FindCommand::new(ContainsKeywords::new(keywords)))
    }
}

//! Grammar of the buyer commands.

use super::*;

const ALL_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BUYER_TYPE,
    PREFIX_TAG,
];

const SINGLE_VALUED: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BUYER_TYPE,
];

pub mod add {
    use super::*;
    use crate::command::AddCommand;
    use crate::field::{Address, BuyerType, Email, Name, Phone};
    use crate::record::Buyer;

    pub const COMMAND: &str = "add";
    pub const USAGE: &str = "add: Adds a buyer to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS b/BUYER_TYPE [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 b/buyer t/friends t/owesMoney";

    pub fn parse(args: &str) -> Result<AddCommand<Buyer>, ParseError> {
        let map = tokenize(args, &ALL_PREFIXES);
        if !map.are_present(&SINGLE_VALUED) || !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage: USAGE });
        }
        map.verify_no_duplicate_prefixes(&SINGLE_VALUED)?;

        let field = |prefix| map.value(prefix).unwrap_or_default();
        let buyer = Buyer::new(
            Name::parse(field(PREFIX_NAME))?,
            Phone::parse(field(PREFIX_PHONE))?,
            Email::parse(field(PREFIX_EMAIL))?,
            Address::parse(field(PREFIX_ADDRESS))?,
            BuyerType::parse(field(PREFIX_BUYER_TYPE))?,
            parse_tags(map.all_values(PREFIX_TAG))?,
        );
        Ok(AddCommand::new(buyer))
    }
}

pub mod edit {
    use super::*;
    use crate::command::{EditCommand, RecordMessages};
    use crate::edit::{Descriptor, EditBuyerDescriptor};
    use crate::field::{Address, BuyerType, Email, Name, Phone};
    use crate::record::Buyer;

    pub const COMMAND: &str = "edit";
    pub const USAGE: &str = "edit: Edits the details of the buyer identified by the index number \
used in the displayed buyer list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [b/BUYER_TYPE] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn parse(args: &str) -> Result<EditCommand<EditBuyerDescriptor>, ParseError> {
        let map = tokenize(args, &ALL_PREFIXES);
        let index =
            parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat { usage: USAGE })?;
        map.verify_no_duplicate_prefixes(&SINGLE_VALUED)?;

        let mut descriptor = EditBuyerDescriptor::new();
        if let Some(raw) = map.value(PREFIX_NAME) {
            descriptor.set_name(Name::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_PHONE) {
            descriptor.set_phone(Phone::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_EMAIL) {
            descriptor.set_email(Email::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_ADDRESS) {
            descriptor.set_address(Address::parse(raw)?);
        }
        if let Some(raw) = map.value(PREFIX_BUYER_TYPE) {
            descriptor.set_buyer_type(BuyerType::parse(raw)?);
        }
        if let Some(tags) = parse_tags_for_edit(map.all_values(PREFIX_TAG))? {
            descriptor.set_tags(&tags);
        }

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NotEdited(<Buyer as RecordMessages>::NOT_EDITED));
        }
        Ok(EditCommand::new(index, descriptor))
    }
}

pub mod delete {
    use super::*;
    use crate::command::DeleteCommand;
    use crate::record::Buyer;

    pub const COMMAND: &str = "delete";
    pub const USAGE: &str = "delete: Deletes the buyer identified by the index number used in the displayed buyer list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

    pub fn parse(args: &str) -> Result<DeleteCommand<Buyer>, ParseError> {
        parse_index(args)
            .map(DeleteCommand::new)
            .map_err(|_| ParseError::InvalidFormat { usage: USAGE })
    }
}

pub mod list {
    use super::*;
    use crate::command::ListCommand;
    use crate::record::Buyer;

    pub const COMMAND: &str = "list";
    pub const USAGE: &str = "list: Lists all buyers.";

    pub fn parse(_args: &str) -> Result<ListCommand<Buyer>, ParseError> {
        Ok(ListCommand::new())
    }
}

pub mod find {
    use super::*;
    use crate::command::FindCommand;
    use crate::model::ContainsKeywords;
    use crate::record::Buyer;

    pub const COMMAND: &str = "find";
    pub const USAGE: &str = "find: Finds all buyers whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    pub fn parse(args: &str) -> Result<FindCommand<Buyer>, ParseError> {
        let keywords: Vec<&str> = args.split_whitespace().collect();
        if keywords.is_empty() {
            return Err(ParseError::InvalidFormat { usage: USAGE });
        }
        Ok(FindCommand::new(ContainsKeywords::new(keywords)))
    }
}

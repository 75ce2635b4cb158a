use once_cell::sync::Lazy;
use regex::Regex;

use super::string_field;

// First character must be alphanumeric so a name is never blank.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));

fn is_valid_name(raw: &str) -> bool {
    NAME_PATTERN.is_match(raw)
}

string_field!(
    /// A buyer's full name.
    Name,
    label = "Name",
    validate = is_valid_name,
    message = "Names should only contain alphanumeric characters and spaces, and it should not be blank",
);

string_field!(
    /// The title of a meet-up.
    MeetUpName,
    label = "Name",
    validate = is_valid_name,
    message = "Meet-up names should only contain alphanumeric characters and spaces, and it should not be blank",
);

impl Name {
    /// Whitespace-separated words of the name, used by keyword search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl MeetUpName {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

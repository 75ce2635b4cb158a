use super::string_field;

fn is_valid_address(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}

string_field!(
    /// A postal address; free text that does not start with whitespace.
    Address,
    label = "Address",
    validate = is_valid_address,
    message = "Addresses can take any values, and it should not be blank",
);

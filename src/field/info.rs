use super::string_field;

fn is_valid_info(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}

string_field!(
    /// Free-text description of a meet-up.
    Info,
    label = "Info",
    validate = is_valid_info,
    message = "Meet-up info can take any values, and it should not be blank",
);

use super::string_field;

fn is_valid_tag(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric())
}

string_field!(
    /// A single-word label attached to a buyer.
    Tag,
    label = "Tag",
    validate = is_valid_tag,
    message = "Tags names should be alphanumeric",
);

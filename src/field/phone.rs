use super::string_field;

fn is_valid_phone(raw: &str) -> bool {
    raw.len() >= 3 && raw.bytes().all(|b| b.is_ascii_digit())
}

string_field!(
    /// A contact phone number.
    Phone,
    label = "Phone",
    validate = is_valid_phone,
    message = "Phone numbers should only contain numbers, and it should be at least 3 digits long",
);

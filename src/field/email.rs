use once_cell::sync::Lazy;
use regex::Regex;

use super::string_field;

const ALNUM: &str = "[A-Za-z0-9]+";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let local = format!(r"{ALNUM}([+_.\-]{ALNUM})*");
    let label = format!(r"{ALNUM}(-{ALNUM})*");
    let pattern = format!(r"^{local}@({label}\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("email pattern is valid")
});

fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}

string_field!(
    /// An email address of the form `local-part@domain`.
    Email,
    label = "Email",
    validate = is_valid_email,
    message = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.",
);

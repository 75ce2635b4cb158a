use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Surface format of meet-up start and end times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// chrono accepts unpadded fields; the stored form must re-render byte for byte.
static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("time pattern is valid"));

fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    if !TIME_SHAPE.is_match(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT).ok()
}

macro_rules! time_field {
    ($(#[$meta:meta])* $ty:ident, label = $label:literal, message = $message:literal $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(NaiveDateTime);

        impl $ty {
            pub const LABEL: &'static str = $label;

            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Parse a `YYYY-MM-DD HH:mm` calendar instant.
            pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
                parse_time(raw.as_ref())
                    .map(Self)
                    .ok_or_else(|| ValidationError::new(Self::LABEL, Self::MESSAGE_CONSTRAINTS))
            }

            pub fn is_valid(raw: &str) -> bool {
                parse_time(raw).is_some()
            }

            pub fn value(&self) -> NaiveDateTime {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.format(TIME_FORMAT))
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

time_field!(
    /// When a meet-up starts.
    From,
    label = "From",
    message = "Meet-up start time should be in the format YYYY-MM-DD HH:mm and be a valid date and time",
);

time_field!(
    /// When a meet-up ends.
    To,
    label = "To",
    message = "Meet-up end time should be in the format YYYY-MM-DD HH:mm and be a valid date and time",
);

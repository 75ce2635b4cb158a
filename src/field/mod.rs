//! Field value objects - validated, immutable wrappers around raw input.
//!
//! Every record field is held as one of these types. Construction runs the
//! field's format check and fails with a [`ValidationError`] carrying a fixed,
//! human-readable constraint message; a constructed value is always valid.
//!
//! ## Example
//!
//! ```
//! use buyerbook::field::{Phone, ValidationError};
//!
//! let phone = Phone::parse("91234567").unwrap();
//! assert_eq!(phone.as_str(), "91234567");
//!
//! let err: ValidationError = Phone::parse("911a").unwrap_err();
//! assert_eq!(err.message(), Phone::MESSAGE_CONSTRAINTS);
//! ```

mod address;
mod buyer_type;
mod email;
mod info;
mod name;
mod phone;
mod tag;
mod time;

use thiserror::Error;

/// A raw value failed its field's format check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Label of the field that rejected the value (e.g. `"Phone"`).
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The field's fixed constraint message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Defines a string-backed value object with a fixed constraint message and
/// a validator function.
macro_rules! string_field {
    (
        $(#[$meta:meta])*
        $ty:ident, label = $label:literal, validate = $validate:path, message = $message:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl $ty {
            /// Label used in error messages and missing-field reports.
            pub const LABEL: &'static str = $label;

            /// Message carried by the [`ValidationError`](crate::field::ValidationError)
            /// when a raw value is rejected.
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            /// Validate `raw` and wrap it.
            pub fn parse(raw: impl Into<String>) -> Result<Self, $crate::field::ValidationError> {
                let raw = raw.into();
                if Self::is_valid(&raw) {
                    Ok(Self(raw))
                } else {
                    Err($crate::field::ValidationError::new(
                        Self::LABEL,
                        Self::MESSAGE_CONSTRAINTS,
                    ))
                }
            }

            /// Returns true if `raw` satisfies this field's format.
            pub fn is_valid(raw: &str) -> bool {
                $validate(raw)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::field::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

pub(crate) use string_field;

pub use address::Address;
pub use buyer_type::BuyerType;
pub use email::Email;
pub use info::Info;
pub use name::{MeetUpName, Name};
pub use phone::Phone;
pub use tag::Tag;
pub use time::{From, To, TIME_FORMAT};

//! Record entities - immutable aggregates of field value objects.
//!
//! Records are never edited in place. An edit builds a new record and the
//! store swaps it for the old one.
//!
//! Each record kind carries two equality notions:
//! - **weak identity** ([`Record::is_same`]): used to detect duplicates
//!   after an add or an edit;
//! - **strong equality** (`PartialEq`): every field equal, used for
//!   store membership and in tests.

mod buyer;
mod meetup;

use std::fmt;

use thiserror::Error;

pub use buyer::Buyer;
pub use meetup::MeetUp;

/// Trait for the record kinds held by the store.
pub trait Record: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// User-facing noun for this kind (e.g. `"buyer"`, `"meet-up"`).
    const KIND: &'static str;

    /// Type name used in missing-field reports (e.g. `"Buyer"`).
    const TYPE_NAME: &'static str;

    /// Weak identity: true if `other` denotes the same real-world entry.
    fn is_same(&self, other: &Self) -> bool;

    /// One-line rendering used in command feedback.
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// A record was assembled with one of its fields absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record}'s {field} field is missing!")]
pub struct MissingFieldError {
    pub record: &'static str,
    pub field: &'static str,
}

impl MissingFieldError {
    pub(crate) fn of<R: Record>(field: &'static str) -> Self {
        Self {
            record: R::TYPE_NAME,
            field,
        }
    }
}

/// Unwrap an optional part or report it missing for record kind `R`.
pub(crate) fn require<R: Record, T>(
    value: Option<T>,
    field: &'static str,
) -> Result<T, MissingFieldError> {
    value.ok_or_else(|| MissingFieldError::of::<R>(field))
}

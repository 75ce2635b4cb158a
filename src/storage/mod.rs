//! Persistence - JSON documents for the buyer and meet-up lists.
//!
//! Records are stored through adapted forms whose fields are plain optional
//! strings. Loading runs every field back through its value object, so a
//! hand-edited file can never smuggle an invalid record into the model.

mod json_buyer;
mod json_meetup;
mod manager;
mod sample;

use thiserror::Error;

use crate::field::ValidationError;
use crate::json::JsonFileError;
use crate::record::MissingFieldError;

pub use json_buyer::{JsonAdaptedBuyer, SerializableBuyerList};
pub use json_meetup::{JsonAdaptedMeetUp, SerializableMeetUpList};
pub use manager::StorageManager;
pub use sample::{sample_buyers, sample_meet_ups};

/// Error type for loading and saving data files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    File(#[from] JsonFileError),
    #[error(transparent)]
    InvalidField(#[from] ValidationError),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    /// Two stored records share a weak identity.
    #[error("{0}")]
    Duplicate(&'static str),
}

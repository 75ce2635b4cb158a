//! Partial-update descriptors and edit resolution.
//!
//! A descriptor holds one `Option` per record field: `None` means "leave
//! unchanged". Resolving a descriptor against an existing record yields the
//! candidate record that an edit command swaps into the store.
//!
//! ## Example
//!
//! ```
//! use buyerbook::edit::{resolve, Descriptor, EditMeetUpDescriptor};
//! use buyerbook::field::{From, Info, MeetUpName, To};
//! use buyerbook::record::MeetUp;
//!
//! let pitch = MeetUp::new(
//!     MeetUpName::parse("Sales Pitch").unwrap(),
//!     Info::parse("Pitching property at Bukit Timah.").unwrap(),
//!     From::parse("2024-09-11 12:00").unwrap(),
//!     To::parse("2024-09-11 12:59").unwrap(),
//! );
//!
//! let mut descriptor = EditMeetUpDescriptor::default();
//! descriptor.set_info(Info::parse("Bring brochures.").unwrap());
//! assert!(descriptor.is_any_field_edited());
//!
//! let edited = resolve(&pitch, &descriptor);
//! assert_eq!(edited.info().as_str(), "Bring brochures.");
//! assert_eq!(edited.name(), pitch.name());
//! ```

mod buyer;
mod meetup;

use crate::record::Record;

pub use buyer::EditBuyerDescriptor;
pub use meetup::EditMeetUpDescriptor;

/// A partial update for one record kind.
pub trait Descriptor: Clone + PartialEq {
    type Target: Record;

    /// Returns true if at least one field is set.
    fn is_any_field_edited(&self) -> bool;

    /// Build the record obtained by overlaying the set fields onto `existing`.
    fn apply(&self, existing: &Self::Target) -> Self::Target;
}

/// Merge `descriptor` onto `existing`.
///
/// Every field set in the descriptor wins; every unset field keeps the
/// existing value. Pure and infallible: both inputs hold only validated values.
pub fn resolve<D: Descriptor>(existing: &D::Target, descriptor: &D) -> D::Target {
    descriptor.apply(existing)
}

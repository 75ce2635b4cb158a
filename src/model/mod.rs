//! Model - the in-memory record store and its filtered views.
//!
//! The model owns one [`RecordList`] per record kind plus the user's
//! preferences. Each list keeps its records in insertion order and a
//! replaceable [`Filter`]; the filtered view is recomputed on every read.
//!
//! ## Example
//!
//! ```
//! use buyerbook::model::{Filter, ModelManager, RecordsExt};
//! use buyerbook::record::MeetUp;
//!
//! let mut model = ModelManager::default();
//! model
//!     .records_mut::<MeetUp>()
//!     .set_filter(Filter::matching(|m: &MeetUp| m.name().as_str().starts_with("Sales")));
//! assert!(model.records::<MeetUp>().filtered().is_empty());
//! ```

mod manager;
mod predicate;
mod record_list;
mod records;

pub use manager::ModelManager;
pub use predicate::{ContainsKeywords, Searchable};
pub use record_list::{Filter, Predicate, RecordList};
pub use records::{Records, RecordsExt};

//! Typed access to the record list of each kind.

use super::record_list::RecordList;
use crate::record::Record;

/// A store holding a [`RecordList`] for record kind `R`.
pub trait Records<R: Record> {
    fn list(&self) -> &RecordList<R>;

    fn list_mut(&mut self) -> &mut RecordList<R>;
}

/// Extension trait for selecting a record list by type on any store.
///
/// `model.records::<Buyer>()` reads better than `Records::<Buyer>::list(&model)`.
pub trait RecordsExt {
    fn records<R: Record>(&self) -> &RecordList<R>
    where
        Self: Records<R>,
    {
        Records::<R>::list(self)
    }

    fn records_mut<R: Record>(&mut self) -> &mut RecordList<R>
    where
        Self: Records<R>,
    {
        Records::<R>::list_mut(self)
    }
}

impl<S> RecordsExt for S {}

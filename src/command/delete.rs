use std::marker::PhantomData;

use tracing::info;

use super::{Command, CommandError, CommandResult, Index, RecordMessages};
use crate::model::{ModelManager, Records, RecordsExt};

/// Removes the record at a position of the currently shown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand<R> {
    index: Index,
    _marker: PhantomData<R>,
}

impl<R: RecordMessages> DeleteCommand<R> {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }
}

impl<R> Command for DeleteCommand<R>
where
    R: RecordMessages,
    ModelManager: Records<R>,
{
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let list = model.records_mut::<R>();
        let target = list
            .get_filtered(self.index.zero_based())
            .cloned()
            .ok_or_else(CommandError::index_out_of_range::<R>)?;

        list.remove(&target);
        info!(kind = R::KIND, index = %self.index, "record deleted");

        Ok(CommandResult::new(format!(
            "{}: {}",
            R::DELETED,
            target.describe()
        )))
    }
}

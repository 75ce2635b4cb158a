use std::marker::PhantomData;

use super::{Command, CommandError, CommandResult, RecordMessages};
use crate::model::{ModelManager, Records, RecordsExt};

/// Clears any search and shows every record of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand<R> {
    _marker: PhantomData<R>,
}

impl<R: RecordMessages> ListCommand<R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<R> Command for ListCommand<R>
where
    R: RecordMessages,
    ModelManager: Records<R>,
{
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        model.records_mut::<R>().show_all();
        Ok(CommandResult::new(R::LISTED_ALL))
    }
}

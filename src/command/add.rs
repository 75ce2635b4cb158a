use tracing::info;

use super::{Command, CommandError, CommandResult, RecordMessages};
use crate::model::{ModelManager, Records, RecordsExt};

/// Appends a new record unless an equivalent one already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand<R> {
    record: R,
}

impl<R: RecordMessages> AddCommand<R> {
    pub fn new(record: R) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &R {
        &self.record
    }
}

impl<R> Command for AddCommand<R>
where
    R: RecordMessages,
    ModelManager: Records<R>,
{
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let list = model.records_mut::<R>();
        if list.has_same(&self.record) {
            return Err(CommandError::duplicate::<R>());
        }

        list.add(self.record.clone());
        info!(kind = R::KIND, total = list.len(), "record added");

        Ok(CommandResult::new(format!(
            "{}: {}",
            R::ADDED,
            self.record.describe()
        )))
    }
}

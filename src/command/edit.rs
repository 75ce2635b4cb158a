use tracing::info;

use super::{Command, CommandError, CommandResult, Index, RecordMessages};
use crate::edit::{resolve, Descriptor};
use crate::model::{ModelManager, Records, RecordsExt};
use crate::record::Record;

/// Edits the record at a position of the currently shown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand<D> {
    index: Index,
    descriptor: D,
}

impl<D: Descriptor> EditCommand<D> {
    pub fn new(index: Index, descriptor: D) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }
}

impl<D> Command for EditCommand<D>
where
    D: Descriptor + std::fmt::Debug,
    D::Target: RecordMessages,
    ModelManager: Records<D::Target>,
{
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let list = model.records_mut::<D::Target>();

        let target = list
            .get_filtered(self.index.zero_based())
            .cloned()
            .ok_or_else(CommandError::index_out_of_range::<D::Target>)?;
        let edited = resolve(&target, &self.descriptor);

        if !target.is_same(&edited) && list.has_same(&edited) {
            return Err(CommandError::duplicate::<D::Target>());
        }

        list.replace(&target, edited.clone());
        list.show_all();
        info!(kind = <D::Target as Record>::KIND, index = %self.index, "record edited");

        Ok(CommandResult::new(format!(
            "{}: {}",
            <D::Target as RecordMessages>::EDITED,
            edited.describe()
        )))
    }
}

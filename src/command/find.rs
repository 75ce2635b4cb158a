use std::marker::PhantomData;

use tracing::debug;

use super::{Command, CommandError, CommandResult, RecordMessages};
use crate::model::{ContainsKeywords, ModelManager, Records, RecordsExt, Searchable};

/// Shows only the records whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand<R> {
    predicate: ContainsKeywords,
    _marker: PhantomData<R>,
}

impl<R: RecordMessages> FindCommand<R> {
    pub fn new(predicate: ContainsKeywords) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }

    pub fn predicate(&self) -> &ContainsKeywords {
        &self.predicate
    }
}

impl<R> Command for FindCommand<R>
where
    R: RecordMessages + Searchable + 'static,
    ModelManager: Records<R>,
{
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let list = model.records_mut::<R>();
        list.set_filter(self.predicate.clone().into_filter());
        let shown = list.filtered_len();
        debug!(kind = R::KIND, keywords = ?self.predicate.keywords(), shown, "filter applied");

        Ok(CommandResult::new(R::listed_overview(shown)))
    }
}

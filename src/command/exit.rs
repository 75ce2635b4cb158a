use super::{Command, CommandError, CommandResult};
use crate::model::ModelManager;

/// Asks the presentation layer to shut down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: "Exiting buyerbook as requested ...".to_string(),
            show_help: false,
            exit: true,
        })
    }
}

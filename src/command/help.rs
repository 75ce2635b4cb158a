use super::{Command, CommandError, CommandResult};
use crate::model::ModelManager;

pub const HELP_MESSAGE: &str = "\
Buyers:    add, edit, delete, list, find
Meet-ups:  addm, editm, deletem, listm, findm
Other:     help, exit
Type a command word on its own to see its parameters.";

/// Asks the presentation layer to show the help text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        Ok(CommandResult {
            feedback: HELP_MESSAGE.to_string(),
            show_help: true,
            exit: false,
        })
    }
}

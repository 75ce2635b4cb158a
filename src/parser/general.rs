//! Commands that are not tied to a record kind.

use super::ParseError;

pub mod help {
    use super::*;
    use crate::command::HelpCommand;

    pub const COMMAND: &str = "help";
    pub const USAGE: &str = "help: Shows program usage instructions.\n\
Example: help";

    pub fn parse(_args: &str) -> Result<HelpCommand, ParseError> {
        Ok(HelpCommand)
    }
}

pub mod exit {
    use super::*;
    use crate::command::ExitCommand;

    pub const COMMAND: &str = "exit";
    pub const USAGE: &str = "exit: Exits the program.\n\
Example: exit";

    pub fn parse(_args: &str) -> Result<ExitCommand, ParseError> {
        Ok(ExitCommand)
    }
}

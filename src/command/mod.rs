//! Command layer - validated operations against the model.
//!
//! Every command checks its preconditions (index bounds, duplicates) before
//! touching the model, so a failed command leaves the model unchanged.
//! Commands that work the same way for both record kinds are generic over
//! the kind; [`RecordMessages`] supplies the kind-specific wording.
//!
//! ## Example
//!
//! ```
//! use buyerbook::command::{Command, EditCommand, Index};
//! use buyerbook::edit::EditBuyerDescriptor;
//! use buyerbook::model::ModelManager;
//!
//! let mut model = ModelManager::default();
//! let command = EditCommand::new(Index::from_zero_based(0), EditBuyerDescriptor::new());
//! let err = command.execute(&mut model).unwrap_err();
//! assert_eq!(err.to_string(), "The buyer index provided is invalid");
//! ```

mod add;
mod delete;
mod edit;
mod exit;
mod find;
mod help;
mod index;
mod list;
mod messages;

use std::fmt;

use thiserror::Error;

use crate::model::ModelManager;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::{HelpCommand, HELP_MESSAGE};
pub use index::Index;
pub use list::ListCommand;
pub use messages::RecordMessages;

/// An executable operation on the model.
pub trait Command: fmt::Debug {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError>;
}

/// What a successful command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The presentation layer should show the help text.
    pub show_help: bool,
    /// The presentation layer should shut down.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// A command was rejected. The model was not modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The index does not exist in the currently shown list.
    #[error("{message}")]
    IndexOutOfRange {
        kind: &'static str,
        message: &'static str,
    },
    /// The change would collide with a different existing record.
    #[error("{message}")]
    DuplicateRecord {
        kind: &'static str,
        message: &'static str,
    },
}

impl CommandError {
    pub(crate) fn index_out_of_range<R: RecordMessages>() -> Self {
        CommandError::IndexOutOfRange {
            kind: R::KIND,
            message: R::INVALID_INDEX,
        }
    }

    pub(crate) fn duplicate<R: RecordMessages>() -> Self {
        CommandError::DuplicateRecord {
            kind: R::KIND,
            message: R::DUPLICATE,
        }
    }
}

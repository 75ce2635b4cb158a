//! LogicManager - the entry point the presentation layer talks to.
//!
//! Every line of input is parsed, executed against the model, and then both
//! record lists are written back to disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::command::{CommandError, CommandResult};
use crate::config::UserPrefs;
use crate::model::{ModelManager, RecordsExt};
use crate::parser::{CommandParser, ParseError};
use crate::record::{Buyer, MeetUp};
use crate::storage::{StorageError, StorageManager};

/// Error type for executing one line of input.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The command ran but its result could not be persisted.
    #[error("Could not save data to file: {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: StorageError,
    },
}

pub struct LogicManager {
    model: ModelManager,
    storage: StorageManager,
    parser: CommandParser,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: StorageManager) -> Self {
        Self {
            model,
            storage,
            parser: CommandParser::default(),
        }
    }

    /// Parse and run `command_text`, then save both lists.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(input = command_text, "executing command");

        let command = self.parser.parse(command_text)?;
        debug!(?command, "parsed");
        let result = command.execute(&mut self.model)?;

        self.save()?;
        Ok(result)
    }

    fn save(&self) -> Result<(), LogicError> {
        let buyers_path = self.model.buyer_list_file_path();
        self.storage
            .save_buyers(buyers_path, self.model.records::<Buyer>().records())
            .map_err(|source| LogicError::Save {
                path: buyers_path.to_path_buf(),
                source,
            })?;

        let meet_ups_path = self.model.meet_up_list_file_path();
        self.storage
            .save_meet_ups(meet_ups_path, self.model.records::<MeetUp>().records())
            .map_err(|source| LogicError::Save {
                path: meet_ups_path.to_path_buf(),
                source,
            })
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Buyers currently shown, in list order.
    pub fn filtered_buyers(&self) -> Vec<&Buyer> {
        self.model.records::<Buyer>().filtered()
    }

    /// Meet-ups currently shown, in list order.
    pub fn filtered_meet_ups(&self) -> Vec<&MeetUp> {
        self.model.records::<MeetUp>().filtered()
    }

    pub fn buyer_list_file_path(&self) -> &Path {
        self.model.buyer_list_file_path()
    }

    pub fn meet_up_list_file_path(&self) -> &Path {
        self.model.meet_up_list_file_path()
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    /// Replace the preferences and persist them.
    pub fn set_user_prefs(&mut self, prefs: UserPrefs) -> Result<(), StorageError> {
        self.storage.save_user_prefs(&prefs)?;
        self.model.set_user_prefs(prefs);
        Ok(())
    }
}

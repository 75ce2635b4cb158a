pub mod command;
pub mod config;
pub mod edit;
pub mod field;
pub mod json;
pub mod logic;
pub mod model;
pub mod parser;
pub mod record;
pub mod storage;

pub use command::{Command, CommandError, CommandResult, Index};
pub use config::{Config, UserPrefs};
pub use edit::{resolve, Descriptor, EditBuyerDescriptor, EditMeetUpDescriptor};
pub use logic::{LogicError, LogicManager};
pub use model::{ModelManager, RecordList, Records, RecordsExt};
pub use parser::{CommandParser, ParseError};
pub use record::{Buyer, MeetUp, MissingFieldError, Record};
pub use storage::{StorageError, StorageManager};

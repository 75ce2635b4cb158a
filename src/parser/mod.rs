//! Parser - turns a line of user input into an executable command.
//!
//! A line is `<command word> <arguments>`. Each command word is registered
//! with a parse function that builds the typed command from the arguments,
//! the same way handlers register with a service by name.
//!
//! ## Example
//!
//! ```
//! use buyerbook::model::ModelManager;
//! use buyerbook::parser::CommandParser;
//!
//! let parser = CommandParser::default();
//! let mut model = ModelManager::default();
//!
//! let command = parser.parse("listm").unwrap();
//! let result = command.execute(&mut model).unwrap();
//! assert_eq!(result.feedback, "Listed all meet-ups");
//! ```

pub mod buyer;
pub mod general;
pub mod meetup;
mod syntax;
mod tokenizer;
mod util;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::command::Command;
use crate::field::ValidationError;

pub use syntax::*;
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};
pub use util::{parse_index, parse_tags, parse_tags_for_edit};

/// Error type for turning user text into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),
    /// An edit named no field to change.
    #[error("{0}")]
    NotEdited(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

type ParseFn = Box<dyn Fn(&str) -> Result<Box<dyn Command>, ParseError> + Send + Sync>;

/// Registry of command words and their argument parsers.
pub struct CommandParser {
    parsers: BTreeMap<String, ParseFn>,
}

impl CommandParser {
    /// An empty registry. See [`CommandParser::default`] for the full command set.
    pub fn new() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Register the parser for `word`.
    ///
    /// Uses builder pattern, returns `self` for chaining.
    pub fn command<F, C>(mut self, word: &str, parse: F) -> Self
    where
        F: Fn(&str) -> Result<C, ParseError> + Send + Sync + 'static,
        C: Command + 'static,
    {
        let parse_fn: ParseFn = Box::new(move |args: &str| {
            parse(args).map(|command| Box::new(command) as Box<dyn Command>)
        });
        self.parsers.insert(word.to_string(), parse_fn);
        self
    }

    /// Parse one line of input.
    pub fn parse(&self, input: &str) -> Result<Box<dyn Command>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: general::help::USAGE,
            });
        }

        let (word, args) = match input.find(char::is_whitespace) {
            Some(split) => input.split_at(split),
            None => (input, ""),
        };

        let parse = self.parsers.get(word).ok_or(ParseError::UnknownCommand)?;
        parse(args)
    }

    /// Registered command words, sorted.
    pub fn commands(&self) -> Vec<&str> {
        self.parsers.keys().map(String::as_str).collect()
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        crate::register_commands!(
            CommandParser::new(),
            buyer::add,
            buyer::edit,
            buyer::delete,
            buyer::list,
            buyer::find,
            meetup::add,
            meetup::edit,
            meetup::delete,
            meetup::list,
            meetup::find,
            general::help,
            general::exit,
        )
    }
}

/// Register command modules with a parser using the module convention.
///
/// Each module must export:
/// - `COMMAND: &str` - the command word
/// - `parse(args) -> Result<impl Command, ParseError>` - the argument parser
#[macro_export]
macro_rules! register_commands {
    ($parser:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $parser
        $(
            .command($($seg)::+::COMMAND, $($seg)::+::parse)
        )+
    };
}

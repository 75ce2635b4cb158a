//! Argument prefixes understood by the command grammar.

use super::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BUYER_TYPE: Prefix = Prefix::new("b/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

pub const PREFIX_INFO: Prefix = Prefix::new("i/");
pub const PREFIX_FROM: Prefix = Prefix::new("f/");
pub const PREFIX_TO: Prefix = Prefix::new("t/");

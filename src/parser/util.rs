use std::collections::BTreeSet;

use super::ParseError;
use crate::command::Index;
use crate::field::Tag;

/// Parse a one-based, non-zero index, ignoring surrounding whitespace.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_tags<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Tag>, ParseError> {
    raw.into_iter()
        .map(|tag| Tag::parse(tag.trim()).map_err(ParseError::from))
        .collect()
}

/// Tags for an edit: `None` when no tag was given, an empty set when the
/// only tag given is empty (clear all tags).
pub fn parse_tags_for_edit(raw: Vec<&str>) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match raw.as_slice() {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(raw).map(Some),
    }
}

//! Splits an argument string into a preamble and prefixed values.

use std::collections::HashMap;
use std::fmt;

use super::ParseError;

/// Marks the start of an argument, e.g. `n/` in `n/John Doe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Values found for each prefix, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.has(*p))
    }

    /// Fail if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.values.get(p).is_some_and(|values| values.len() > 1))
            .map(|p| p.as_str())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
        }
    }

    fn put(&mut self, prefix: Prefix, value: &str) {
        self.values
            .entry(prefix)
            .or_default()
            .push(value.to_string());
    }
}

/// Tokenize `args` on `prefixes`. A prefix only counts when preceded by
/// whitespace, so `args` normally starts with a space.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let needle = format!(" {}", prefix);
        let mut from = 0;
        while let Some(found) = args[from..].find(&needle) {
            let start = from + found + 1;
            positions.push((start, prefix));
            from = start;
        }
    }
    positions.sort_by_key(|(start, _)| *start);
    positions.dedup_by_key(|(start, _)| *start);

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.put(*prefix, args[value_start..value_end].trim());
    }
    map
}

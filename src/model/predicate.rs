//! Keyword search over record names.

use super::record_list::Filter;
use crate::record::{Buyer, MeetUp, Record};

/// Records that expose words to match search keywords against.
pub trait Searchable: Record {
    fn search_words(&self) -> Vec<&str>;
}

impl Searchable for Buyer {
    fn search_words(&self) -> Vec<&str> {
        self.name().words().collect()
    }
}

impl Searchable for MeetUp {
    fn search_words(&self) -> Vec<&str> {
        self.name().words().collect()
    }
}

/// Matches a record if any keyword equals one of its name words, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsKeywords {
    keywords: Vec<String>,
}

impl ContainsKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches<R: Searchable>(&self, record: &R) -> bool {
        let words = record.search_words();
        self.keywords
            .iter()
            .any(|keyword| words.iter().any(|word| word.eq_ignore_ascii_case(keyword)))
    }

    /// Turn this predicate into a view filter.
    pub fn into_filter<R: Searchable + 'static>(self) -> Filter<R> {
        Filter::matching(move |record: &R| self.matches(record))
    }
}

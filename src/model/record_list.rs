//! RecordList - authoritative record sequence plus a live filter.

use std::fmt;
use std::sync::Arc;

use crate::record::Record;

/// Shared predicate over records of one kind.
pub type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Which records the filtered view shows.
pub enum Filter<R> {
    /// No predicate installed; every record is shown.
    ShowAll,
    /// Only records accepted by the predicate are shown.
    Matching(Predicate<R>),
}

impl<R> Filter<R> {
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Filter::Matching(Arc::new(predicate))
    }

    pub fn accepts(&self, record: &R) -> bool {
        match self {
            Filter::ShowAll => true,
            Filter::Matching(predicate) => predicate(record),
        }
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, Filter::ShowAll)
    }
}

impl<R> Default for Filter<R> {
    fn default() -> Self {
        Filter::ShowAll
    }
}

impl<R> Clone for Filter<R> {
    fn clone(&self) -> Self {
        match self {
            Filter::ShowAll => Filter::ShowAll,
            Filter::Matching(predicate) => Filter::Matching(Arc::clone(predicate)),
        }
    }
}

impl<R> fmt::Debug for Filter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::ShowAll => f.write_str("ShowAll"),
            Filter::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}

/// Ordered records of one kind with a replaceable view filter.
///
/// None of the mutating operations fail. Callers check index bounds and
/// duplicates before calling `add` or `replace`.
#[derive(Debug, Clone)]
pub struct RecordList<R> {
    records: Vec<R>,
    filter: Filter<R>,
}

impl<R> Default for RecordList<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: Filter::ShowAll,
        }
    }
}

impl<R: Record> RecordList<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self {
            records,
            filter: Filter::ShowAll,
        }
    }

    /// Every record, in insertion order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Strong-equality membership.
    pub fn has(&self, record: &R) -> bool {
        self.records.iter().any(|r| r == record)
    }

    /// Weak-identity membership, used for duplicate detection.
    pub fn has_same(&self, record: &R) -> bool {
        self.records.iter().any(|r| r.is_same(record))
    }

    /// Append a record and show the whole list again.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
        self.filter = Filter::ShowAll;
    }

    /// Remove the first strongly-equal record. Returns true if one was removed.
    pub fn remove(&mut self, record: &R) -> bool {
        match self.records.iter().position(|r| r == record) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swap `target` for `edited` in place, keeping its position.
    /// Returns false if `target` is not in the list.
    pub fn replace(&mut self, target: &R, edited: R) -> bool {
        match self.records.iter_mut().find(|r| **r == *target) {
            Some(slot) => {
                *slot = edited;
                true
            }
            None => false,
        }
    }

    /// Replace all records, keeping the current filter.
    pub fn reset_data(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn filter(&self) -> &Filter<R> {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Filter<R>) {
        self.filter = filter;
    }

    pub fn show_all(&mut self) {
        self.filter = Filter::ShowAll;
    }

    /// The records the current filter accepts, in list order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| self.filter.accepts(r))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.records.iter().filter(|r| self.filter.accepts(r)).count()
    }

    /// Record at a zero-based position of the filtered view.
    pub fn get_filtered(&self, index: usize) -> Option<&R> {
        self.records
            .iter()
            .filter(|r| self.filter.accepts(r))
            .nth(index)
    }
}

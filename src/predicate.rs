//! Filter conditions evaluated against decoded records.

use chrono::{DateTime, Utc};

use crate::record::Record;

/// The immutable set of optional filter conditions for one run.
///
/// Every condition is an explicit `Option`; an unset condition is vacuously
/// true. `id: Some(0)` therefore selects records whose id is 0; it does not
/// disable the id condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    /// Exact-match id condition.
    pub id: Option<i64>,
    /// Inclusive lower bound on record time.
    pub from_time: Option<DateTime<Utc>>,
    /// Inclusive upper bound on record time.
    pub to_time: Option<DateTime<Utc>>,
    /// Word that must appear in the record's word list.
    pub word: Option<String>,
}

impl PredicateSet {
    /// True when no condition is configured; every record matches.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.from_time.is_none()
            && self.to_time.is_none()
            && self.word.is_none()
    }

    /// Evaluate all configured conditions against `record`.
    ///
    /// Conditions are ANDed and evaluation short-circuits on the first miss.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(id) = self.id {
            if record.id != id {
                return false;
            }
        }
        if let Some(from) = self.from_time {
            if record.time < from {
                return false;
            }
        }
        if let Some(to) = self.to_time {
            if record.time > to {
                return false;
            }
        }
        if let Some(word) = &self.word {
            if !record.words.iter().any(|w| w == word) {
                return false;
            }
        }
        true
    }
}

//! Ordered collections of decay records.

use serde::{Deserialize, Serialize};

use crate::record::DecayRecord;

/// Append-only, insertion-ordered set of decay records.
///
/// Mirrors how records arrive from an acquisition session: one curve at a
/// time, displayed in the order they were added. Names are labels rather
/// than keys, so duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecayRecordCollection {
    records: Vec<DecayRecord>,
}

impl DecayRecordCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection seeded with a single record.
    pub fn with_record(record: DecayRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// Append a record at the end.
    pub fn add(&mut self, record: DecayRecord) {
        self.records.push(record);
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[DecayRecord] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DecayRecord> {
        self.records.iter()
    }
}

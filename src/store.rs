use thiserror::Error;

use crate::record::{Priority, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a to-do item.")]
    EmptyInput,
}

/// Ordered, session-lifetime list of to-do records. Insertion order is
/// display order; duplicates are allowed.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Trims `text` and appends a record. Whitespace-only input is rejected
    /// without touching the store.
    pub fn append(&mut self, text: &str, priority: Priority) -> Result<(), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        self.records.push(Record::new(text.to_string(), priority));
        Ok(())
    }

    /// Pops the most recently appended record. `None` on an empty store is
    /// an informational condition for the caller, not an error.
    pub fn remove_last(&mut self) -> Option<Record> {
        self.records.pop()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Read-only view of the records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

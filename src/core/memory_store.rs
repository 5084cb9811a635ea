//! In-memory record store
//!
//! A `Vec`-backed [`RecordStore`] with the same line semantics as the file
//! store: append at the end, rewrite or remove by exact name. Used wherever a
//! store file is not wanted (unit tests, benchmarks, embedding).

use crate::core::traits::RecordStore;
use crate::types::{LedgerError, Record};

/// Record store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Records in store order
    records: Vec<Record>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        MemoryStore {
            records: Vec::new(),
        }
    }

    /// Create a store holding `records` in the given order
    pub fn with_records(records: Vec<Record>) -> Self {
        MemoryStore { records }
    }

    /// Borrow the records in store order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn position(&self, name: &str) -> Result<usize, LedgerError> {
        self.records
            .iter()
            .position(|record| record.name == name)
            .ok_or_else(|| LedgerError::not_found(name))
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: &Record) -> Result<(), LedgerError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn replace_line(&mut self, old_name: &str, record: &Record) -> Result<(), LedgerError> {
        let index = self.position(old_name)?;
        self.records[index] = record.clone();
        Ok(())
    }

    fn delete_line(&mut self, name: &str) -> Result<(), LedgerError> {
        let index = self.position(name)?;
        self.records.remove(index);
        Ok(())
    }

    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.records.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryStore {
        MemoryStore::with_records(vec![
            Record::new("Bob", 5),
            Record::new("Bobby", 9),
            Record::new("Carol", 8),
        ])
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        store.append(&Record::new("Alice", 10)).unwrap();
        store.append(&Record::new("Zed", 1)).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![Record::new("Alice", 10), Record::new("Zed", 1)]
        );
    }

    #[test]
    fn test_replace_targets_exact_name_only() {
        let mut store = sample();
        store
            .replace_line("Bob", &Record::new("Robert", 5))
            .unwrap();

        assert_eq!(
            store.records(),
            &[
                Record::new("Robert", 5),
                Record::new("Bobby", 9),
                Record::new("Carol", 8),
            ]
        );
    }

    #[test]
    fn test_delete_targets_exact_name_only() {
        let mut store = sample();
        store.delete_line("Bob").unwrap();

        assert_eq!(
            store.records(),
            &[Record::new("Bobby", 9), Record::new("Carol", 8)]
        );
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let mut store = sample();
        assert_eq!(
            store.replace_line("Bo", &Record::new("Bo", 1)),
            Err(LedgerError::not_found("Bo"))
        );
        assert_eq!(store.delete_line("Dan"), Err(LedgerError::not_found("Dan")));
        assert_eq!(store.records().len(), 3);
    }
}

//! Core traits for record storage and audit logging
//!
//! This module defines the trait abstractions that let the engine run against
//! the on-disk store and log as well as their in-memory counterparts.

use crate::types::{LedgerError, LogEntry, Record};

/// Trait for the ordered record collection
///
/// Implementations must not cache across calls in a way that hides external
/// edits: each call reflects the backing storage as it is at that moment.
/// Name uniqueness is the engine's responsibility, not the store's.
pub trait RecordStore {
    /// Read every record in store order
    fn load(&self) -> Result<Vec<Record>, LedgerError>;

    /// Add one record after the last one
    fn append(&mut self, record: &Record) -> Result<(), LedgerError>;

    /// Overwrite the record whose name equals `old_name` exactly
    fn replace_line(&mut self, old_name: &str, record: &Record) -> Result<(), LedgerError>;

    /// Remove the record whose name equals `name` exactly
    fn delete_line(&mut self, name: &str) -> Result<(), LedgerError>;

    /// Whether the store holds no records
    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.load()?.is_empty())
    }
}

/// Trait for the append-only audit log
pub trait AuditLog {
    /// Append one entry
    fn append(&mut self, entry: &LogEntry) -> Result<(), LedgerError>;
}

//! Audit log sinks
//!
//! The audit log is append-only: one line per engine operation, never read
//! back by the engine. [`FileAuditLog`] appends to a text file;
//! [`MemoryAuditLog`] keeps entries in a `Vec` for tests and embedding.

use crate::core::traits::AuditLog;
use crate::io::ensure_file;
use crate::types::{LedgerError, LogEntry};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log appending to a text file
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Open the log at `path`, creating an empty file if none exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        ensure_file(&path)?;
        Ok(FileAuditLog { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditLog for FileAuditLog {
    fn append(&mut self, entry: &LogEntry) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry.to_line())?;
        file.sync_data()?;
        Ok(())
    }
}

/// Audit log held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditLog {
    entries: Vec<LogEntry>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        MemoryAuditLog {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries rendered as log lines
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::to_line).collect()
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&mut self, entry: &LogEntry) -> Result<(), LedgerError> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, Outcome};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_log_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.log");
        fs::write(&path, "earlier line\n").unwrap();

        let mut log = FileAuditLog::open(&path).unwrap();
        log.append(&LogEntry::new(
            Event::Add,
            Outcome::Success,
            Some("Alice,10".to_string()),
        ))
        .unwrap();
        log.append(&LogEntry::new(Event::Total, Outcome::Failure, None))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier line");
        assert!(lines[1].ends_with(" - Add Success Alice,10"));
        assert!(lines[2].ends_with(" - Total Failure"));
    }

    #[test]
    fn test_file_log_open_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.log");

        FileAuditLog::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_memory_log_keeps_order() {
        let mut log = MemoryAuditLog::new();
        log.append(&LogEntry::new(Event::Search, Outcome::Success, None))
            .unwrap();
        log.append(&LogEntry::new(Event::Delete, Outcome::Failure, None))
            .unwrap();

        let events: Vec<Event> = log.entries().iter().map(|e| e.event).collect();
        assert_eq!(events, vec![Event::Search, Event::Delete]);
        assert!(log.lines()[1].ends_with(" - Delete Failure"));
    }
}

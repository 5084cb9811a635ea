//! Operation reports and audit log entries
//!
//! Every engine operation yields a [`Report`] on success and a `LedgerError`
//! on failure; either way one [`LogEntry`] is appended to the audit log.

use super::record::{Amount, Record};
use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout of audit log lines (`DD/MM/YYYY HH:MM:SS`)
pub const LOG_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Engine operations, as named in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Add,
    Delete,
    RenameRecord,
    UpdateAmount,
    Search,
    Total,
    ListSorted,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::Add => "Add",
            Event::Delete => "Delete",
            Event::RenameRecord => "RenameRecord",
            Event::UpdateAmount => "UpdateAmount",
            Event::Search => "Search",
            Event::Total => "Total",
            Event::ListSorted => "ListSorted",
        };
        f.write_str(name)
    }
}

/// Whether an operation succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("Success"),
            Outcome::Failure => f.write_str("Failure"),
        }
    }
}

/// One line of the audit log
///
/// Entries are append-only; the engine never reads them back.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub event: Event,
    pub outcome: Outcome,
    pub detail: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(event: Event, outcome: Outcome, detail: Option<String>) -> Self {
        LogEntry {
            timestamp: Local::now(),
            event,
            outcome,
            detail,
        }
    }

    /// Render the entry as `DD/MM/YYYY HH:MM:SS - <event> <outcome>[ <detail>]`
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{} - {} {}",
            self.timestamp.format(LOG_TIMESTAMP_FORMAT),
            self.event,
            self.outcome
        );
        if let Some(detail) = &self.detail {
            line.push(' ');
            line.push_str(detail);
        }
        line
    }
}

/// Successful result of an engine operation
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    /// Operation that produced this report
    pub event: Event,

    /// Human-readable summary for the presentation layer
    pub message: String,

    /// Short detail written to the audit log
    pub detail: Option<String>,

    /// Operation-specific payload
    pub data: T,
}

impl<T> Report<T> {
    pub fn new(event: Event, message: impl Into<String>, data: T) -> Self {
        Report {
            event,
            message: message.into(),
            detail: None,
            data,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A record before and after an in-place rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub before: Record,
    pub after: Record,
}

/// What add did with the amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was appended
    Created(Record),

    /// The amount was summed into an existing record
    Merged(Change),
}

/// What delete did with the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The amount was reduced and the record kept
    Reduced(Change),

    /// The amount reached zero and the record was removed
    Removed(Record),
}

/// Sum of all amounts in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Total {
    pub records: usize,
    pub amount: Amount,
}

//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The persisted record and its amount type
//! - `matching`: Keyword match results and disambiguation strategies
//! - `report`: Operation reports and audit log entries
//! - `error`: Error types for the ledger engine

pub mod error;
pub mod matching;
pub mod record;
pub mod report;

pub use error::LedgerError;
pub use matching::{Candidate, Disambiguation, MatchResult};
pub use record::{Amount, Record};
pub use report::{AddOutcome, Change, DeleteOutcome, Event, LogEntry, Outcome, Report, Total};

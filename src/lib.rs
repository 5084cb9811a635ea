//! Rust Ledger Engine Library
//! # Overview
//!
//! This library provides a flat-file ledger of named records, each a unique
//! name paired with a non-negative integer amount, with every operation
//! recorded in an append-only audit log.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, MatchResult, LogEntry, etc.)
//! - [`cli`] - CLI arguments parsing and result rendering
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Name and amount syntax checks
//!   - [`core::resolver`] - Keyword search and disambiguation
//!   - [`core::engine`] - Operation orchestration
//! - [`io`] - Store file, line format, and audit log handling
//!
//! # Operations
//!
//! - **Add**: Create a record, or merge the amount into an existing one
//! - **Delete**: Remove part of an amount; a record reaching zero is removed
//! - **Rename**: Change a record's name, refusing collisions
//! - **Update amount**: Overwrite a record's amount
//! - **Search**: Substring search over names
//! - **Total**: Sum of all amounts
//! - **List sorted**: All records ordered by their `name,amount` text
//!
//! # Keyword Resolution
//!
//! Names passed to delete, rename, and update are keywords: any record whose
//! name contains the keyword matches. When several records match, the caller
//! supplies a [`Disambiguation`] to choose one.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{AuditLog, LedgerEngine, MemoryStore, RecordStore};
pub use crate::io::{FileAuditLog, FileStore, MemoryAuditLog};
pub use crate::types::{
    AddOutcome, Amount, Candidate, Change, DeleteOutcome, Disambiguation, Event, LedgerError,
    LogEntry, MatchResult, Outcome, Record, Report, Total,
};

//! Error types for the ledger engine
//!
//! This module defines all error types that can occur while validating input,
//! resolving records, and reading or rewriting the store.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Invalid names, invalid amounts
//! - **Resolution Errors**: No match, unresolved ambiguity, bad selection
//! - **Ledger Errors**: Insufficient amount, duplicate names, empty store, overflow
//! - **Storage Errors**: Malformed store lines, file I/O failures

use crate::types::record::Amount;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// Every engine operation converts failures into one of these variants, logs a
/// Failure audit entry, and returns it to the caller. None of them panic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Name is empty or does not match `^[A-Za-z][A-Za-z0-9]*$`
    #[error("Invalid name '{name}': must start with a letter and contain only letters and digits")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// Amount is not a digit string, is too large, or violates a caller policy
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The rejected amount text
        amount: String,
        /// Why the amount was rejected
        reason: String,
    },

    /// No record matches the keyword
    #[error("No record matches '{keyword}'")]
    NotFound {
        /// Keyword or exact name that was looked up
        keyword: String,
    },

    /// Several records match and no usable selection was supplied
    ///
    /// Also raised by add when the keyword matched a different record and the
    /// caller has not chosen between merging and creating.
    #[error("'{keyword}' matches {} record(s): {}; a selection is required", candidates.len(), candidates.join(", "))]
    AmbiguousUnresolved {
        /// Keyword that was looked up
        keyword: String,
        /// Candidate names in match order
        candidates: Vec<String>,
    },

    /// Selection does not point at one of the candidates
    #[error("Invalid selection '{choice}': expected {expected}")]
    InvalidSelection {
        /// The selection as supplied
        choice: String,
        /// What would have been accepted
        expected: String,
    },

    /// Delete would drive the amount below zero
    #[error("Insufficient amount for '{name}': available {available}, requested {requested}")]
    InsufficientAmount {
        /// Record name
        name: String,
        /// Current amount
        available: Amount,
        /// Amount asked to remove
        requested: Amount,
    },

    /// A record with this name already exists
    #[error("A record named '{name}' already exists")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// The store holds no records
    #[error("The store is empty")]
    EmptyStore,

    /// Arithmetic on amounts exceeded the supported range
    #[error("Amount overflow in {operation} for '{name}'")]
    AmountOverflow {
        /// Operation that would overflow
        operation: String,
        /// Record name (or "*" for whole-store totals)
        name: String,
    },

    /// A store line could not be parsed as `name,amount`
    #[error("Malformed record at line {line}: '{content}'")]
    MalformedRecord {
        /// 1-based line number in the store file
        line: u64,
        /// Raw content of the offending line
        content: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is the only class that aborts an operation outright.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io) => LedgerError::IoError {
                message: io.to_string(),
            },
            _ => LedgerError::MalformedRecord {
                line: error.position().map(|pos| pos.line()).unwrap_or_default(),
                content: error.to_string(),
            },
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidName error
    pub fn invalid_name(name: &str) -> Self {
        LedgerError::InvalidName {
            name: name.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(keyword: &str) -> Self {
        LedgerError::NotFound {
            keyword: keyword.to_string(),
        }
    }

    /// Create an AmbiguousUnresolved error
    pub fn ambiguous(keyword: &str, candidates: Vec<String>) -> Self {
        LedgerError::AmbiguousUnresolved {
            keyword: keyword.to_string(),
            candidates,
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(choice: impl ToString, expected: impl ToString) -> Self {
        LedgerError::InvalidSelection {
            choice: choice.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an InsufficientAmount error
    pub fn insufficient_amount(name: &str, available: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientAmount {
            name: name.to_string(),
            available,
            requested,
        }
    }

    /// Create a DuplicateName error
    pub fn duplicate_name(name: &str) -> Self {
        LedgerError::DuplicateName {
            name: name.to_string(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(operation: &str, name: &str) -> Self {
        LedgerError::AmountOverflow {
            operation: operation.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(line: u64, content: &str) -> Self {
        LedgerError::MalformedRecord {
            line,
            content: content.to_string(),
        }
    }
}

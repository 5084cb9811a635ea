//! Record-related types for the ledger
//!
//! This module defines the Record structure persisted one per line in the
//! store file, along with the amount type used across the engine.

use std::fmt;

/// Record amount
///
/// Amounts are non-negative integers. Sums that do not fit in 64 bits are
/// rejected with `LedgerError::AmountOverflow`.
pub type Amount = u64;

/// A named ledger record
///
/// Persisted as a single `name,amount` line. Names are unique within a store;
/// the engine enforces this across add, rename, and merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Record name, matching `^[A-Za-z][A-Za-z0-9]*$`
    pub name: String,

    /// Current amount (never negative; zero-amount records are removed)
    pub amount: Amount,
}

impl Record {
    /// Create a new record
    pub fn new(name: impl Into<String>, amount: Amount) -> Self {
        Record {
            name: name.into(),
            amount,
        }
    }

    /// Render the record in its persisted `name,amount` form
    ///
    /// Sorted listings order records by this text, not by amount.
    pub fn to_line(&self) -> String {
        format!("{},{}", self.name, self.amount)
    }

    /// Same record with a different amount
    pub fn with_amount(&self, amount: Amount) -> Self {
        Record::new(self.name.clone(), amount)
    }

    /// Same record under a different name
    pub fn renamed(&self, name: &str) -> Self {
        Record::new(name, self.amount)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.amount)
    }
}

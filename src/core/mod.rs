//! Core business logic module
//!
//! This module contains the record resolution and mutation components:
//! - `traits` - Trait abstractions for record stores and audit logs
//! - `validator` - Name and amount syntax checks
//! - `resolver` - Keyword search and disambiguation
//! - `engine` - Operation orchestration
//! - `memory_store` - In-memory record store

pub mod engine;
pub mod memory_store;
pub mod resolver;
pub mod traits;
pub mod validator;

pub use engine::LedgerEngine;
pub use memory_store::MemoryStore;
pub use resolver::{match_records, resolve_ambiguous, Resolver};
pub use traits::{AuditLog, RecordStore};
pub use validator::{validate_amount, validate_name};

//! I/O module
//!
//! Handles the store and audit log files.
//!
//! # Components
//!
//! - `record_format` - `name,amount` line format (parsing, serialization)
//! - `file_store` - File-backed record store with atomic line rewrites
//! - `audit_log` - Append-only audit log sinks (file and in-memory)

pub mod audit_log;
pub mod file_store;
pub mod record_format;

pub use audit_log::{FileAuditLog, MemoryAuditLog};
pub use file_store::FileStore;
pub use record_format::{read_records, write_records, StoreRow};

use std::fs::OpenOptions;
use std::path::Path;

/// Create `path` as an empty file unless it already exists
pub(crate) fn ensure_file(path: &Path) -> std::io::Result<()> {
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

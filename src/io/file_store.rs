//! File-backed record store
//!
//! Persists records one per line as `name,amount` in a plain text file.
//! Delegates line format concerns to the record_format module.
//!
//! # Design
//!
//! Nothing is cached: every call reads the file again, so edits made by hand
//! between engine operations are picked up. Appends go straight to the end of
//! the file. Line rewrites and deletions load all records, change the line
//! whose name is an exact match, and write the full set to a temporary file in
//! the same directory, which is then synced and renamed over the store. A
//! failed rewrite therefore leaves the previous file intact. The temporary
//! file takes the store's permissions before the rename.
//!
//! There is no locking. Two processes rewriting the same store race, and the
//! last rename wins.

use crate::core::traits::RecordStore;
use crate::io::ensure_file;
use crate::io::record_format::{read_records, write_records};
use crate::types::{LedgerError, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Record store backed by a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, creating an empty file if none exists
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be created or opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        ensure_file(&path)?;
        Ok(FileStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, edit, and atomically write back the full record set
    fn rewrite<F>(&mut self, edit: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Vec<Record>) -> Result<(), LedgerError>,
    {
        let mut records = self.load()?;
        edit(&mut records)?;
        self.persist(&records)
    }

    fn persist(&self, records: &[Record]) -> Result<(), LedgerError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        write_records(records, temp.as_file_mut())?;
        temp.as_file().set_permissions(fs::metadata(&self.path)?.permissions())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| LedgerError::from(e.error))?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "store rewritten");
        Ok(())
    }
}

fn position_of(records: &[Record], name: &str) -> Result<usize, LedgerError> {
    records
        .iter()
        .position(|record| record.name == name)
        .ok_or_else(|| LedgerError::not_found(name))
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Record>, LedgerError> {
        let file = File::open(&self.path)?;
        let records = read_records(BufReader::new(file))?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "store loaded");
        Ok(records)
    }

    fn append(&mut self, record: &Record) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        // Keep a hand-edited last line without a newline from fusing with ours.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        write_records(std::slice::from_ref(record), &mut file)?;
        file.sync_all()?;

        tracing::debug!(path = %self.path.display(), record = %record, "record appended");
        Ok(())
    }

    fn replace_line(&mut self, old_name: &str, record: &Record) -> Result<(), LedgerError> {
        self.rewrite(|records| {
            let index = position_of(records, old_name)?;
            records[index] = record.clone();
            Ok(())
        })
    }

    fn delete_line(&mut self, name: &str) -> Result<(), LedgerError> {
        self.rewrite(|records| {
            let index = position_of(records, name)?;
            records.remove(index);
            Ok(())
        })
    }
}

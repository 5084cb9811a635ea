//! Store line format handling
//!
//! This module centralizes the `name,amount` line format, providing:
//! - StoreRow structure for (de)serialization
//! - Conversion from store rows to validated records
//! - Record serialization for appends and full rewrites
//!
//! The format has no header and no quoting; names are restricted to letters
//! and digits, so a comma can only ever be the field separator.

use crate::core::validator::{validate_amount, validate_name};
use crate::types::{LedgerError, Record};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One line of the store file, before validation
///
/// The amount stays textual so that signs, decimals, and other non-digit
/// content are rejected by the amount validator instead of being coerced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreRow {
    pub name: String,
    pub amount: String,
}

impl From<&Record> for StoreRow {
    fn from(record: &Record) -> Self {
        StoreRow {
            name: record.name.clone(),
            amount: record.amount.to_string(),
        }
    }
}

/// Convert a StoreRow to a Record
///
/// # Errors
///
/// Returns `MalformedRecord` carrying `line` if the name or amount is invalid.
pub fn convert_store_row(row: StoreRow, line: u64) -> Result<Record, LedgerError> {
    let malformed = || LedgerError::malformed_record(line, &format!("{},{}", row.name, row.amount));

    validate_name(&row.name).map_err(|_| malformed())?;
    let amount = validate_amount(&row.amount).map_err(|_| malformed())?;

    Ok(Record::new(row.name.clone(), amount))
}

/// Read every record from `input`
///
/// Blank lines are skipped. Any other line must hold exactly two fields.
///
/// # Errors
///
/// - `MalformedRecord` with the 1-based line number of the first bad line
/// - `IoError` if reading fails
pub fn read_records<R: Read>(mut input: R) -> Result<Vec<Record>, LedgerError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(data.as_slice());

    // csv positions do not count the blank lines it skips
    let mut lines = LineCounter::new(&data);
    let mut records = Vec::new();
    for result in reader.records() {
        let fields = result?;
        let line = lines.line_at(fields.position().map(|pos| pos.byte()).unwrap_or_default());

        if fields.len() != 2 {
            return Err(LedgerError::malformed_record(line, &join_fields(&fields)));
        }

        let row: StoreRow = fields
            .deserialize(None)
            .map_err(|_| LedgerError::malformed_record(line, &join_fields(&fields)))?;
        records.push(convert_store_row(row, line)?);
    }

    Ok(records)
}

/// Physical line numbers over the raw store bytes, advanced monotonically
struct LineCounter<'a> {
    data: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(data: &'a [u8]) -> Self {
        LineCounter {
            data,
            offset: 0,
            line: 1,
        }
    }

    /// Line of the first byte at or after `from` that is not a line terminator
    fn line_at(&mut self, from: u64) -> u64 {
        let from = usize::try_from(from)
            .unwrap_or(self.data.len())
            .clamp(self.offset, self.data.len());
        let start = self.data[from..]
            .iter()
            .position(|byte| *byte != b'\n' && *byte != b'\r')
            .map_or(self.data.len(), |skipped| from + skipped);

        self.line += self.data[self.offset..start]
            .iter()
            .filter(|byte| **byte == b'\n')
            .count() as u64;
        self.offset = start;
        self.line
    }
}

/// Write records as `name,amount` lines
///
/// # Errors
///
/// Returns `IoError` if writing or flushing fails.
pub fn write_records(records: &[Record], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    for record in records {
        writer.serialize(StoreRow::from(record))?;
    }
    writer.flush()?;

    Ok(())
}

fn join_fields(fields: &StringRecord) -> String {
    fields.iter().collect::<Vec<_>>().join(",")
}

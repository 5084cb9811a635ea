// CLI module
// Command-line interface, argument parsing, and result rendering

mod args;

pub use args::{AddChoice, CliArgs, Command, TargetChoice};

use crate::core::{AuditLog, LedgerEngine, RecordStore};
use crate::io::{FileAuditLog, FileStore};
use crate::types::{AddOutcome, DeleteOutcome, LedgerError};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Open the configured store and audit log and run the requested command
///
/// # Errors
///
/// Returns an error if either file cannot be opened or the operation fails.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let store = FileStore::open(&args.store)?;
    let audit = FileAuditLog::open(&args.log)?;
    let mut engine = LedgerEngine::new(store, audit);

    execute(&mut engine, &args.command, output)
}

/// Run one command against an engine and render its result to `output`
pub fn execute<S: RecordStore, A: AuditLog>(
    engine: &mut LedgerEngine<S, A>,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match command {
        Command::Add {
            name,
            amount,
            choice,
        } => {
            let report = engine.add(name, amount, &choice.to_disambiguation())?;
            let record = match &report.data {
                AddOutcome::Created(record) => record,
                AddOutcome::Merged(change) => &change.after,
            };
            writeln!(output, "{}", report.message)?;
            writeln!(output, "{}", record)?;
        }
        Command::Delete {
            name,
            amount,
            choice,
        } => {
            let report = engine.delete(name, amount, &choice.to_disambiguation())?;
            writeln!(output, "{}", report.message)?;
            if let DeleteOutcome::Reduced(change) = &report.data {
                writeln!(output, "{}", change.after)?;
            }
        }
        Command::Rename {
            current,
            new_name,
            choice,
        } => {
            let report = engine.rename_record(current, new_name, &choice.to_disambiguation())?;
            writeln!(output, "{}", report.message)?;
            writeln!(output, "{}", report.data.after)?;
        }
        Command::Update {
            name,
            amount,
            choice,
        } => {
            let report = engine.update_amount(name, amount, &choice.to_disambiguation())?;
            writeln!(output, "{}", report.message)?;
            writeln!(output, "{}", report.data.after)?;
        }
        Command::Search { keyword } => {
            let report = engine.search(keyword)?;
            writeln!(output, "{}", report.message)?;
            for candidate in report.data.candidates() {
                writeln!(output, "{}) {}", candidate.position, candidate.record)?;
            }
        }
        Command::Total => {
            let report = engine.total()?;
            writeln!(output, "{}", report.data.amount)?;
        }
        Command::List => {
            let report = engine.list_sorted()?;
            for record in &report.data {
                writeln!(output, "{}", record)?;
            }
        }
    }

    Ok(())
}

/// Describe a failure for stderr, numbering candidates when a choice is needed
pub fn describe_error(error: &LedgerError) -> String {
    let mut text = format!("Error: {}", error);
    if let LedgerError::AmbiguousUnresolved { candidates, .. } = error {
        for (index, name) in candidates.iter().enumerate() {
            text.push_str(&format!("\n  {}) {}", index + 1, name));
        }
        text.push_str("\nRe-run with --pick <N> to choose one of the records above.");
    }
    text
}

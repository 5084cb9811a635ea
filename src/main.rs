//! Ledger CLI
//!
//! Command-line interface for a flat-file ledger of named amounts.
//!
//! # Usage
//!
//! ```bash
//! ledger add Alice 10
//! ledger add Bob 5 --store accounts.csv --log accounts.log
//! ledger search Rec
//! ledger delete Rec 1 --pick 2
//! ledger rename Alice Alicia
//! ledger update Bob 12
//! ledger total
//! ledger list
//! ```
//!
//! Every command is recorded in the audit log. Diagnostics go to stderr and
//! are controlled with `--log-level` or `LEDGER_LOG_LEVEL`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid input, no match, unresolved ambiguity, I/O failure, etc.)

use rust_ledger_engine::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let directives = format!(
        "ledger={level},rust_ledger_engine={level}",
        level = args.log_level
    );
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level '{}' ({}), using warn", args.log_level, e);
        EnvFilter::new("ledger=warn,rust_ledger_engine=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("{}", cli::describe_error(&e));
        process::exit(1);
    }
}

use crate::types::Disambiguation;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Keep a ledger of named amounts in a plain text file
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Keep a ledger of named amounts in a plain text file", long_about = None)]
pub struct CliArgs {
    /// Store file holding one `name,amount` record per line
    #[arg(
        long = "store",
        value_name = "PATH",
        env = "LEDGER_STORE",
        default_value = "ledger.csv",
        global = true
    )]
    pub store: PathBuf,

    /// Audit log file receiving one line per operation
    #[arg(
        long = "log",
        value_name = "PATH",
        env = "LEDGER_LOG",
        default_value = "ledger.log",
        global = true
    )]
    pub log: PathBuf,

    /// Diagnostic verbosity written to stderr (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "LEDGER_LOG_LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"],
        global = true
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an amount, creating the record or merging into an existing one
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        choice: AddChoice,
    },

    /// Remove part or all of a record's amount
    Delete {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        choice: TargetChoice,
    },

    /// Rename a record, keeping its amount
    Rename {
        current: String,
        new_name: String,
        #[command(flatten)]
        choice: TargetChoice,
    },

    /// Overwrite a record's amount
    Update {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        choice: TargetChoice,
    },

    /// List records whose name contains the keyword
    Search { keyword: String },

    /// Print the sum of all amounts
    Total,

    /// Print all records sorted by their `name,amount` text
    List,
}

/// How delete, rename, and update pick among several matching records
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TargetChoice {
    /// Use the N-th matching record (1-based, as listed by `search`)
    #[arg(long = "pick", value_name = "N", conflicts_with = "select")]
    pub pick: Option<usize>,

    /// Use the matching record with exactly this name
    #[arg(long = "select", value_name = "NAME")]
    pub select: Option<String>,
}

impl TargetChoice {
    pub fn to_disambiguation(&self) -> Disambiguation {
        match (self.pick, &self.select) {
            (Some(index), _) => Disambiguation::SelectIndex(index),
            (None, Some(name)) => Disambiguation::MergeInto(name.clone()),
            (None, None) => Disambiguation::FailOnAmbiguous,
        }
    }
}

/// How add decides between merging and creating when the name matches other records
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AddChoice {
    /// Merge into the N-th matching record (1-based)
    #[arg(long = "pick", value_name = "N", conflicts_with_all = ["merge_into", "create_new"])]
    pub pick: Option<usize>,

    /// Merge into the matching record with exactly this name
    #[arg(long = "merge-into", value_name = "NAME", conflicts_with = "create_new")]
    pub merge_into: Option<String>,

    /// Create the name as a new record even though other names contain it
    #[arg(long = "create-new")]
    pub create_new: bool,
}

impl AddChoice {
    pub fn to_disambiguation(&self) -> Disambiguation {
        if let Some(index) = self.pick {
            Disambiguation::SelectIndex(index)
        } else if let Some(name) = &self.merge_into {
            Disambiguation::MergeInto(name.clone())
        } else if self.create_new {
            Disambiguation::CreateNew
        } else {
            Disambiguation::FailOnAmbiguous
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, Operation, OutputFormat};
use tab_records::errors::RecordResult;

/// Tab Records
///
/// Reads and writes plain-text files holding one record per line, with two
/// columns separated by a single tab.
///
/// ## Usage
/// ```bash
/// tab-records write contacts.tsv "Shelby Macias" "3027 Lorem St."
/// tab-records read contacts.tsv --format json
/// tab-records copy contacts.tsv backup.tsv
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "tab-records")]
#[command(about = "Read and write tab-delimited two-column record files")]
#[command(version)]
#[command(
    long_about = "Reads and writes plain-text record files: one record per line, two columns separated by a tab. \nColumns beyond the second are ignored on read; there is no quoting or escaping."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every record of a file
    Read {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Create or truncate a file and write one record to it
    Write {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Columns of the record, in order. None writes an empty line.
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
    },
    /// Copy every record of SOURCE into DESTINATION, keeping two columns
    Copy {
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        #[arg(value_name = "DESTINATION")]
        destination: PathBuf,
    },
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Read { path, format } => Operation::Read { path, format },
            Command::Write { path, fields } => Operation::Write { path, fields },
            Command::Copy {
                source,
                destination,
            } => Operation::Copy {
                source,
                destination,
            },
        }
    }
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> RecordResult<Config> {
        let cli = Self::parse();
        Config::new(cli.command.into())
    }
}

use std::path::{Path, PathBuf};

use tab_records::errors::{RecordError, RecordResult};

/// How records are printed by the `read` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `first | second`, with `<absent>` for a missing second column
    Text,
    /// One JSON object per line
    Json,
}

/// Validated operation derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Read {
        path: PathBuf,
        format: OutputFormat,
    },
    Write {
        path: PathBuf,
        fields: Vec<String>,
    },
    Copy {
        source: PathBuf,
        destination: PathBuf,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub operation: Operation,
}

impl Config {
    pub fn new(operation: Operation) -> RecordResult<Self> {
        let config = Self { operation };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> RecordResult<()> {
        if let Operation::Copy {
            source,
            destination,
        } = &self.operation
            && same_file(source, destination)
        {
            // The destination is truncated before the source is read
            return Err(RecordError::ValidationError {
                message: format!(
                    "source and destination are the same file: {}",
                    source.display()
                ),
            });
        }
        Ok(())
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

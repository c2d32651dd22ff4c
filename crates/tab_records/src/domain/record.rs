use std::fmt;

use derive_getters::Getters;
use serde::Serialize;

/// Access mode of a [`RecordReaderWriter`](crate::application::RecordReaderWriter).
///
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => f.write_str("Read"),
            Mode::Write => f.write_str("Write"),
        }
    }
}

/// A two-column line record
///
/// `first` is always present once a line has been read, even when it is the
/// empty string. `second` is `None` when the line had no delimiter, which is
/// distinct from an empty second column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Getters)]
pub struct Record {
    first: String,
    second: Option<String>,
}

impl Record {
    pub fn new(first: impl Into<String>, second: Option<String>) -> Self {
        Self {
            first: first.into(),
            second,
        }
    }

    /// Record with both columns set
    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(first, Some(second.into()))
    }

    /// Fields in write order; an absent second column is omitted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.first.as_str()];
        if let Some(second) = &self.second {
            fields.push(second);
        }
        fields
    }
}

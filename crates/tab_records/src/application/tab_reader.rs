use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::{
    domain::{LineHandle, Record, RecordReader},
    errors::{RecordError, RecordResult},
    utils::line_format::{parse_line, read_line},
};

struct OpenReader {
    path: PathBuf,
    lines: BufReader<File>,
}

/// Tab-delimited implementation of [`RecordReader`]
///
/// Reads the file line by line through a buffered stream; nothing beyond the
/// current line is held in memory.
#[derive(Default)]
pub struct TabRecordReader {
    stream: Option<OpenReader>,
    line: Vec<u8>,
}

impl TabRecordReader {
    /// Create an unopened reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader already opened on `path`
    pub fn open_at(path: &Path) -> RecordResult<Self> {
        let mut reader = Self::new();
        reader.open(path)?;
        Ok(reader)
    }

    /// Path of the open file, if any
    pub fn path(&self) -> Option<&Path> {
        self.stream.as_ref().map(|s| s.path.as_path())
    }
}

impl LineHandle for TabRecordReader {
    fn open(&mut self, path: &Path) -> RecordResult<()> {
        self.close()?;

        let file = File::open(path).map_err(|e| RecordError::from_read_open(e, path))?;
        tracing::debug!(path = %path.display(), "opened record file for reading");

        self.stream = Some(OpenReader {
            path: path.to_path_buf(),
            lines: BufReader::new(file),
        });
        Ok(())
    }

    fn close(&mut self) -> RecordResult<()> {
        if let Some(stream) = self.stream.take() {
            tracing::debug!(path = %stream.path.display(), "closed record reader");
        }
        self.line.clear();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl RecordReader for TabRecordReader {
    fn read(&mut self) -> RecordResult<Option<Record>> {
        let stream = self
            .stream
            .as_mut()
            .ok_or(RecordError::NotOpen { operation: "read" })?;

        let found = read_line(&mut stream.lines, &mut self.line)
            .map_err(|e| RecordError::io(e, &stream.path))?;
        if !found {
            return Ok(None);
        }

        let line = std::str::from_utf8(&self.line).map_err(|e| {
            RecordError::io(io::Error::new(io::ErrorKind::InvalidData, e), &stream.path)
        })?;
        let record = parse_line(line);
        tracing::trace!(?record, "read record");
        Ok(Some(record))
    }
}

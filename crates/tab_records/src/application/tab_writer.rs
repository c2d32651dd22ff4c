use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{
    domain::{LineHandle, RecordWriter},
    errors::{RecordError, RecordResult},
    utils::line_format::{LINE_TERMINATOR, format_line},
};

struct OpenWriter {
    path: PathBuf,
    sink: BufWriter<File>,
}

/// Tab-delimited implementation of [`RecordWriter`]
///
/// Opening truncates the target. Lines are buffered and flushed on
/// [`close`](LineHandle::close) or when the writer is dropped.
#[derive(Default)]
pub struct TabRecordWriter {
    stream: Option<OpenWriter>,
}

impl TabRecordWriter {
    /// Create an unopened writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer already opened on `path`
    pub fn open_at(path: &Path) -> RecordResult<Self> {
        let mut writer = Self::new();
        writer.open(path)?;
        Ok(writer)
    }

    pub fn path(&self) -> Option<&Path> {
        self.stream.as_ref().map(|s| s.path.as_path())
    }
}

impl LineHandle for TabRecordWriter {
    fn open(&mut self, path: &Path) -> RecordResult<()> {
        self.close()?;

        let file = File::create(path).map_err(|e| RecordError::io(e, path))?;
        tracing::debug!(path = %path.display(), "opened record file for writing");

        self.stream = Some(OpenWriter {
            path: path.to_path_buf(),
            sink: BufWriter::new(file),
        });
        Ok(())
    }

    fn close(&mut self) -> RecordResult<()> {
        // The handle is released even when the final flush fails
        if let Some(mut stream) = self.stream.take() {
            stream
                .sink
                .flush()
                .map_err(|e| RecordError::io(e, &stream.path))?;
            tracing::debug!(path = %stream.path.display(), "closed record writer");
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl RecordWriter for TabRecordWriter {
    fn write(&mut self, fields: &[&str]) -> RecordResult<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or(RecordError::NotOpen { operation: "write" })?;

        let mut line = format_line(fields);
        line.push_str(LINE_TERMINATOR);

        stream
            .sink
            .write_all(line.as_bytes())
            .map_err(|e| RecordError::io(e, &stream.path))?;
        tracing::trace!(columns = fields.len(), "wrote record");
        Ok(())
    }
}

impl Drop for TabRecordWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("failed to close record writer on drop: {}", e);
        }
    }
}

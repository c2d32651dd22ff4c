use crate::{domain::LineHandle, errors::RecordResult};

/// Domain trait for sequential record writing
pub trait RecordWriter: LineHandle {
    /// Append one record built from `fields`
    ///
    /// An empty slice still produces a line (a bare line terminator).
    ///
    /// # Returns
    /// * `Ok(())` - The line was handed to the underlying stream
    /// * `Err(RecordError::NotOpen)` - No file is open
    /// * `Err(RecordError::Io)` - The line could not be written
    fn write(&mut self, fields: &[&str]) -> RecordResult<()>;
}

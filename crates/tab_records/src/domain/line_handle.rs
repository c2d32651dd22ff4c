use std::path::Path;

use crate::errors::RecordResult;

/// Capability shared by record readers and writers
///
/// A handle owns at most one open file at a time.
pub trait LineHandle {
    /// Open `path`, releasing any handle already held first
    ///
    /// # Errors
    /// * [`RecordError::ResourceNotFound`](crate::errors::RecordError::ResourceNotFound) -
    ///   the file does not exist and the handle reads
    /// * [`RecordError::Io`](crate::errors::RecordError::Io) - any other filesystem failure
    fn open(&mut self, path: &Path) -> RecordResult<()>;

    /// Release the handle if one is held.
    ///
    /// Can be called any number of times, including before `open`.
    fn close(&mut self) -> RecordResult<()>;

    fn is_open(&self) -> bool;
}

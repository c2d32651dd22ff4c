use std::fmt;
use std::path::Path;

use crate::{
    application::{
        TabRecordReader, TabRecordWriter,
        factory::{ReaderFactory, WriterFactory, tab_reader_factory, tab_writer_factory},
    },
    domain::{Mode, Record, RecordReader, RecordWriter},
    errors::{RecordError, RecordResult},
};

/// Which component currently owns the file handle
enum Active<R, W> {
    Unopened,
    Reading(R),
    Writing(W),
}

/// Mode-gated record reader/writer
///
/// Holds either a reader or a writer, never both. `read` is only accepted
/// after opening in [`Mode::Read`] and `write` only after opening in
/// [`Mode::Write`]; any other call fails with [`RecordError::WrongMode`] and
/// leaves the instance usable.
///
/// The line format is decided by the injected reader and writer factories.
/// [`RecordReaderWriter::new`] wires the tab-delimited ones.
///
/// The handle is released on [`close`](Self::close), before every re-open and
/// when the value is dropped.
pub struct RecordReaderWriter<R = TabRecordReader, W = TabRecordWriter>
where
    R: RecordReader,
    W: RecordWriter,
{
    reader_factory: ReaderFactory<R>,
    writer_factory: WriterFactory<W>,
    active: Active<R, W>,
}

impl RecordReaderWriter {
    /// Create an unopened instance using the tab-delimited format
    pub fn new() -> Self {
        Self::with_factories(tab_reader_factory(), tab_writer_factory())
    }

    /// Create an instance and open `path` in `mode` right away
    ///
    /// # Errors
    /// Same as [`open`](Self::open).
    pub fn from_path(path: impl AsRef<Path>, mode: Mode) -> RecordResult<Self> {
        let mut reader_writer = Self::new();
        reader_writer.open(path, mode)?;
        Ok(reader_writer)
    }
}

impl Default for RecordReaderWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> RecordReaderWriter<R, W>
where
    R: RecordReader,
    W: RecordWriter,
{
    /// Create an unopened instance with custom reader and writer factories
    pub fn with_factories(
        reader_factory: ReaderFactory<R>,
        writer_factory: WriterFactory<W>,
    ) -> Self {
        Self {
            reader_factory,
            writer_factory,
            active: Active::Unopened,
        }
    }

    /// Open `path` for reading or writing
    ///
    /// Whatever was open before is closed first. Read mode needs an existing
    /// file; write mode creates or truncates it. On failure the instance is
    /// left unopened.
    ///
    /// # Errors
    /// * [`RecordError::ResourceNotFound`] - read mode on a missing file
    /// * [`RecordError::Io`] - any other filesystem failure
    pub fn open(&mut self, path: impl AsRef<Path>, mode: Mode) -> RecordResult<()> {
        let path = path.as_ref();
        self.close()?;

        self.active = match mode {
            Mode::Read => Active::Reading((self.reader_factory)(path)?),
            Mode::Write => Active::Writing((self.writer_factory)(path)?),
        };
        tracing::debug!(path = %path.display(), %mode, "record file opened");
        Ok(())
    }

    /// Read the next record
    ///
    /// # Returns
    /// * `Ok(Some(Record))` - The next record
    /// * `Ok(None)` - End of input
    /// * `Err(RecordError::WrongMode)` - Not opened in read mode
    pub fn read(&mut self) -> RecordResult<Option<Record>> {
        match &mut self.active {
            Active::Reading(reader) => reader.read(),
            _ => Err(RecordError::WrongMode {
                expected: Mode::Read,
            }),
        }
    }

    /// Read the next record into `record`, returning whether one was found.
    ///
    /// At end of input `record` is reset to the empty record.
    #[deprecated(
        since = "0.1.0",
        note = "use `read`, which returns `Option<Record>`; this will be removed"
    )]
    pub fn read_into(&mut self, record: &mut Record) -> RecordResult<bool> {
        let next = self.read()?;
        let found = next.is_some();
        *record = next.unwrap_or_default();
        Ok(found)
    }

    /// Append one record
    ///
    /// `fields` are joined in order. An absent or empty field list writes an
    /// empty line, so `write(None::<&str>)` and `write([] as [&str; 0])` both
    /// produce a bare line terminator.
    ///
    /// # Errors
    /// * [`RecordError::WrongMode`] - Not opened in write mode
    /// * [`RecordError::Io`] - The line could not be written
    pub fn write<I, S>(&mut self, fields: I) -> RecordResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Active::Writing(writer) = &mut self.active else {
            return Err(RecordError::WrongMode {
                expected: Mode::Write,
            });
        };

        let owned: Vec<S> = fields.into_iter().collect();
        let fields: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
        writer.write(&fields)
    }

    /// Write a previously read record back out
    pub fn write_record(&mut self, record: &Record) -> RecordResult<()> {
        self.write(record.fields())
    }

    /// Close whichever component is active.
    ///
    /// Legal in every state and idempotent. The instance is unopened afterwards
    /// even if releasing the handle reports an error.
    pub fn close(&mut self) -> RecordResult<()> {
        match std::mem::replace(&mut self.active, Active::Unopened) {
            Active::Unopened => Ok(()),
            Active::Reading(mut reader) => reader.close(),
            Active::Writing(mut writer) => writer.close(),
        }
    }

    /// Current mode, or `None` when nothing is open
    pub fn mode(&self) -> Option<Mode> {
        match self.active {
            Active::Unopened => None,
            Active::Reading(_) => Some(Mode::Read),
            Active::Writing(_) => Some(Mode::Write),
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode().is_some()
    }
}

impl<R, W> Drop for RecordReaderWriter<R, W>
where
    R: RecordReader,
    W: RecordWriter,
{
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("failed to close record file on drop: {}", e);
        }
    }
}

impl<R, W> fmt::Debug for RecordReaderWriter<R, W>
where
    R: RecordReader,
    W: RecordWriter,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordReaderWriter")
            .field("mode", &self.mode())
            .finish()
    }
}

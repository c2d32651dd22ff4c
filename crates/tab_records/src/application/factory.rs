use std::path::Path;

use crate::{
    application::{TabRecordReader, TabRecordWriter},
    errors::RecordResult,
};

/// Builds a reader already opened on the given path
pub type ReaderFactory<R> = Box<dyn Fn(&Path) -> RecordResult<R>>;

/// Builds a writer already opened on the given path
pub type WriterFactory<W> = Box<dyn Fn(&Path) -> RecordResult<W>>;

pub fn tab_reader_factory() -> ReaderFactory<TabRecordReader> {
    Box::new(TabRecordReader::open_at)
}

pub fn tab_writer_factory() -> WriterFactory<TabRecordWriter> {
    Box::new(TabRecordWriter::open_at)
}

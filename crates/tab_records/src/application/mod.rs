pub mod factory;
pub mod reader_writer;
pub mod tab_reader;
pub mod tab_writer;

pub use factory::{ReaderFactory, WriterFactory};
pub use reader_writer::RecordReaderWriter;
pub use tab_reader::TabRecordReader;
pub use tab_writer::TabRecordWriter;

pub mod line_handle;
pub mod record;
pub mod record_reader;
pub mod record_writer;

pub use line_handle::LineHandle;
pub use record::{Mode, Record};
pub use record_reader::RecordReader;
pub use record_writer::RecordWriter;

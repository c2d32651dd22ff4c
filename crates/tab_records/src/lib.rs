//! # Tab Records
//!
//! A reader/writer for plain-text files holding one two-column record per
//! line, with columns separated by a single tab.
//!
//! ## Features
//! - Mode-gated access: a file is open either for reading or for writing
//! - Records with an always-present first column and an optional second one
//! - Pluggable line formats through reader and writer factories
//!
//! ## Modules
//! - `application`: Tab-delimited reader and writer, and the mode-gated facade
//! - `domain`: Record types and the reader/writer traits
//! - `errors`: Error type and result alias
//! - `utils`: Line format helpers and logging setup
//!
//! ```no_run
//! use tab_records::{Mode, RecordReaderWriter};
//!
//! # fn main() -> Result<(), tab_records::RecordError> {
//! let mut writer = RecordReaderWriter::from_path("contacts.tsv", Mode::Write)?;
//! writer.write(["Shelby Macias", "3027 Lorem St.|Kokomo"])?;
//! writer.close()?;
//!
//! let mut reader = RecordReaderWriter::from_path("contacts.tsv", Mode::Read)?;
//! while let Some(record) = reader.read()? {
//!     println!("{} -> {:?}", record.first(), record.second());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod errors;
pub mod utils;

pub use application::{RecordReaderWriter, TabRecordReader, TabRecordWriter};
pub use domain::{LineHandle, Mode, Record, RecordReader, RecordWriter};
pub use errors::{RecordError, RecordResult};

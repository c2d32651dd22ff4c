//! Tab-delimited line format
//!
//! One record per line, columns separated by a single horizontal tab. There is
//! no quoting and no escaping: a field that already contains a tab or a line
//! break is written verbatim and reads back as a different record.

use std::io::{self, BufRead};

use crate::domain::Record;

/// Column delimiter
pub const DELIMITER: &str = "\t";

/// Line terminator appended after every written record
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Split a line into a record.
///
/// The first segment always becomes `first`, so an empty line yields an empty
/// first column. The second segment, if present, becomes `second`. Anything
/// after the second segment is dropped.
pub fn parse_line(line: &str) -> Record {
    let mut segments = line.split(DELIMITER);
    let first = segments.next().unwrap_or_default();
    let second = segments.next().map(str::to_owned);
    Record::new(first, second)
}

/// Join fields into a line, without the terminator
pub fn format_line(fields: &[&str]) -> String {
    fields.join(DELIMITER)
}

/// Read one line into `line`, without its terminator.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns `false` once the input
/// is exhausted.
pub fn read_line<B: BufRead>(input: &mut B, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    let mut consumed_any = false;
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            return Ok(consumed_any);
        }
        consumed_any = true;

        if let Some(pos) = buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            let terminator = buf[pos];
            line.extend_from_slice(&buf[..pos]);
            input.consume(pos + 1);
            if terminator == b'\r' && input.fill_buf()?.first() == Some(&b'\n') {
                input.consume(1);
            }
            return Ok(true);
        }

        let len = buf.len();
        line.extend_from_slice(buf);
        input.consume(len);
    }
}

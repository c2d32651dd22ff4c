use crate::{
    domain::{LineHandle, Record},
    errors::RecordResult,
};

/// Domain trait for sequential record reading
///
/// Implementations decide how a raw line maps onto a [`Record`], which lets the
/// facade swap line formats without touching its mode handling.
pub trait RecordReader: LineHandle {
    /// Read the next record
    ///
    /// # Returns
    /// * `Ok(Some(Record))` - The next line, split into at most two columns
    /// * `Ok(None)` - End of input; repeated calls keep returning `None`
    /// * `Err(RecordError::NotOpen)` - No file is open
    fn read(&mut self) -> RecordResult<Option<Record>>;
}

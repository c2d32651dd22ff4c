use std::fs;
use std::path::PathBuf;

use tab_records::utils::line_format::LINE_TERMINATOR;
use tab_records::{Mode, Record, RecordError, RecordReaderWriter};
use tempfile::TempDir;

const CONTACTS: &str = "Shelby Macias\t3027 Lorem St.|Kokomo|Hertfordshire|L9T 3D5|England\n\
Porter Coffey\tAp #827-9064 Sapien. Rd.|Palo Alto|Fl.|HM0G 0YR|Scotland\n";

fn scratch(temp_dir: &TempDir, name: &str, content: Option<&str>) -> PathBuf {
    let path = temp_dir.path().join(name);
    if let Some(content) = content {
        fs::write(&path, content).expect("Failed to write test content");
    }
    path
}

fn written_with<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "write_file.tsv", None);
    {
        let mut writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
        writer.write(fields).unwrap();
    }
    fs::read_to_string(&path).unwrap()
}

/// Test constructing in read mode
#[test]
fn test_from_path_read_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "contacts.tsv", Some(CONTACTS));

    let reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    assert_eq!(reader.mode(), Some(Mode::Read));
}

/// Test constructing in write mode creates the file
#[test]
fn test_from_path_write_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "new.tsv", None);

    let writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
    assert_eq!(writer.mode(), Some(Mode::Write));
    assert!(path.exists());
}

#[test]
fn test_from_path_missing_file_in_read_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "contacts_missing_file.tsv", None);

    let result = RecordReaderWriter::from_path(&path, Mode::Read);
    assert!(matches!(result, Err(RecordError::ResourceNotFound { .. })));

    // Nothing was left holding the path
    let mut writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
    writer.write(["fresh"]).unwrap();
    writer.close().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("fresh{LINE_TERMINATOR}")
    );
}

#[test]
fn test_write_mode_in_missing_directory_keeps_io_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("no").join("dir").join("x.tsv");

    let err = RecordReaderWriter::from_path(&path, Mode::Write).unwrap_err();
    assert!(matches!(err, RecordError::Io { .. }));
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_open_missing_file_leaves_unopened() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut reader = RecordReaderWriter::new();

    let result = reader.open(scratch(&temp_dir, "missing.tsv", None), Mode::Read);
    assert!(matches!(result, Err(RecordError::ResourceNotFound { .. })));
    assert!(!reader.is_open());
}

#[test]
fn test_read_values_from_valid_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "contacts.tsv", Some(CONTACTS));

    let mut reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    let record = reader.read().unwrap().expect("expected a record");

    assert_eq!(record.first(), "Shelby Macias");
    assert_eq!(
        record.second().as_deref(),
        Some("3027 Lorem St.|Kokomo|Hertfordshire|L9T 3D5|England")
    );

    let record = reader.read().unwrap().expect("expected a second record");
    assert_eq!(record.first(), "Porter Coffey");
    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_read_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "emptyFile.tsv", Some(""));

    let mut reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    assert_eq!(reader.read().unwrap(), None);
    assert_eq!(reader.read().unwrap(), None);
}

#[test]
fn test_read_empty_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "emptyLine.tsv", Some(LINE_TERMINATOR));

    let mut reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    let record = reader.read().unwrap().expect("expected a record");

    assert_eq!(record.first(), "");
    assert_eq!(record.second(), &None);
}

#[test]
fn test_write_hello_world() {
    assert_eq!(
        written_with(["hello", "world"]),
        format!("hello\tworld{LINE_TERMINATOR}")
    );
}

#[test]
fn test_write_empty_and_absent_fields() {
    assert_eq!(written_with([] as [&str; 0]), LINE_TERMINATOR);
    assert_eq!(written_with(None::<&str>), LINE_TERMINATOR);
}

#[test]
fn test_absent_fields_read_back_as_empty_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "bare.tsv", None);

    let mut reader_writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
    reader_writer.write(None::<String>).unwrap();
    reader_writer.open(&path, Mode::Read).unwrap();

    assert_eq!(reader_writer.read().unwrap(), Some(Record::new("", None)));
    assert_eq!(reader_writer.read().unwrap(), None);
}

#[test]
fn test_read_in_write_mode_is_wrong_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "write_file.tsv", None);

    let mut writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
    writer.write(["kept"]).unwrap();

    let err = writer.read().unwrap_err();
    assert!(matches!(
        err,
        RecordError::WrongMode {
            expected: Mode::Read
        }
    ));
    assert_eq!(err.to_string(), "This instance is not in Read mode");

    // Still usable in its own mode
    writer.write(["after"]).unwrap();
    writer.close().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("kept{LINE_TERMINATOR}after{LINE_TERMINATOR}")
    );
}

#[test]
fn test_write_in_read_mode_is_wrong_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "contacts.tsv", Some(CONTACTS));

    let mut reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    let err = reader.write(None::<&str>).unwrap_err();

    assert!(matches!(
        err,
        RecordError::WrongMode {
            expected: Mode::Write
        }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), CONTACTS);
    assert!(reader.read().unwrap().is_some());
}

#[test]
fn test_close_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "contacts.tsv", Some(CONTACTS));

    let mut reader_writer = RecordReaderWriter::new();
    reader_writer.close().unwrap();
    assert_eq!(reader_writer.mode(), None);

    reader_writer.open(&path, Mode::Read).unwrap();
    reader_writer.close().unwrap();
    reader_writer.close().unwrap();
    assert_eq!(reader_writer.mode(), None);
    assert!(matches!(
        reader_writer.read(),
        Err(RecordError::WrongMode { .. })
    ));
}

#[test]
fn test_reopen_switches_mode() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = scratch(&temp_dir, "contacts.tsv", Some(CONTACTS));
    let target = scratch(&temp_dir, "copy.tsv", None);

    let mut reader_writer = RecordReaderWriter::from_path(&source, Mode::Read).unwrap();
    let record = reader_writer.read().unwrap().expect("expected a record");

    reader_writer.open(&target, Mode::Write).unwrap();
    assert_eq!(reader_writer.mode(), Some(Mode::Write));
    reader_writer.write_record(&record).unwrap();

    reader_writer.open(&target, Mode::Read).unwrap();
    assert_eq!(reader_writer.read().unwrap(), Some(record));
}

#[test]
fn test_drop_flushes_written_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "dropped.tsv", None);

    {
        let mut writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
        for i in 0..100 {
            writer.write([format!("key{i}"), format!("value{i}")]).unwrap();
        }
    }

    let mut reader = RecordReaderWriter::from_path(&path, Mode::Read).unwrap();
    let mut count = 0;
    while let Some(record) = reader.read().unwrap() {
        assert_eq!(record, Record::pair(format!("key{count}"), format!("value{count}")));
        count += 1;
    }
    assert_eq!(count, 100);
}

#[test]
fn test_embedded_tab_corrupts_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = scratch(&temp_dir, "corrupt.tsv", None);

    let mut reader_writer = RecordReaderWriter::from_path(&path, Mode::Write).unwrap();
    reader_writer.write(["a\tb", "c"]).unwrap();
    reader_writer.open(&path, Mode::Read).unwrap();

    assert_eq!(reader_writer.read().unwrap(), Some(Record::pair("a", "b")));
}

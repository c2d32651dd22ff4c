use std::io::Write;
use std::path::Path;

use tab_records::{Mode, Record, RecordError, RecordReaderWriter, RecordResult};

use crate::config::{Config, Operation, OutputFormat};

const ABSENT: &str = "<absent>";

/// Execute the configured operation, printing results to `out`
pub fn run(config: Config, out: &mut impl Write) -> RecordResult<()> {
    match config.operation {
        Operation::Read { path, format } => print_records(&path, format, out),
        Operation::Write { path, fields } => write_record(&path, &fields),
        Operation::Copy {
            source,
            destination,
        } => {
            let copied = copy_records(&source, &destination)?;
            writeln!(out, "{} records copied", copied).map_err(stdout_error)
        }
    }
}

fn print_records(path: &Path, format: OutputFormat, out: &mut impl Write) -> RecordResult<()> {
    let mut reader = RecordReaderWriter::from_path(path, Mode::Read)?;
    while let Some(record) = reader.read()? {
        let line = match format {
            OutputFormat::Text => render_text(&record),
            OutputFormat::Json => render_json(&record)?,
        };
        writeln!(out, "{}", line).map_err(stdout_error)?;
    }
    reader.close()
}

fn write_record(path: &Path, fields: &[String]) -> RecordResult<()> {
    let mut writer = RecordReaderWriter::from_path(path, Mode::Write)?;
    writer.write(fields)?;
    writer.close()?;
    tracing::info!(path = %path.display(), columns = fields.len(), "record written");
    Ok(())
}

/// Copy records, returning how many were copied
fn copy_records(source: &Path, destination: &Path) -> RecordResult<usize> {
    let mut reader = RecordReaderWriter::from_path(source, Mode::Read)?;
    let mut writer = RecordReaderWriter::from_path(destination, Mode::Write)?;

    let mut copied = 0;
    while let Some(record) = reader.read()? {
        writer.write_record(&record)?;
        copied += 1;
    }

    writer.close()?;
    reader.close()?;
    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        copied,
        "records copied"
    );
    Ok(copied)
}

fn render_text(record: &Record) -> String {
    format!(
        "{} | {}",
        record.first(),
        record.second().as_deref().unwrap_or(ABSENT)
    )
}

fn render_json(record: &Record) -> RecordResult<String> {
    Ok(serde_json::to_string(record)?)
}

fn stdout_error(source: std::io::Error) -> RecordError {
    RecordError::Io {
        path: "<stdout>".to_string(),
        source,
    }
}

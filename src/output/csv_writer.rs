//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::{ExportRow, OutputConfig};
use crate::error::Result;
use crate::record_set::RecordSet;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Timestamp`, `Sender`, `Body`
///   - With derived fields: `Date`, `Year`, `Month`, `MonthName`, `Day`,
///     `DayName`, `Hour`, `Minute`, `HourBand` appended
/// - Encoding: UTF-8
pub fn write_csv(set: &RecordSet, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(file, set, config)?;
    Ok(())
}

/// Converts records to a CSV string. Same layout as [`write_csv`].
pub fn to_csv(set: &RecordSet, config: &OutputConfig) -> Result<String> {
    let bytes = write_rows(Vec::new(), set, config)?;
    Ok(String::from_utf8(bytes)?)
}

fn write_rows<W: Write>(sink: W, set: &RecordSet, config: &OutputConfig) -> Result<W> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(ExportRow::header(config))?;
    for record in set {
        writer.write_record(ExportRow::new(record, config).cells())?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}

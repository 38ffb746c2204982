//! JSON Lines (JSONL) output writer.
//!
//! One record per line, suited to streaming into other tools.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::{ExportRow, OutputConfig};
use crate::error::Result;
use crate::record_set::RecordSet;

/// Writes records to JSONL (JSON Lines) format.
pub fn write_jsonl(set: &RecordSet, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for record in set {
        let line = serde_json::to_string(&ExportRow::new(record, config))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(set: &RecordSet, config: &OutputConfig) -> Result<String> {
    let mut output = String::new();
    for record in set {
        output.push_str(&serde_json::to_string(&ExportRow::new(record, config))?);
        output.push('\n');
    }
    Ok(output)
}

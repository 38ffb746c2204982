//! JSON output writer for records and reports.

use std::fs::File;
use std::io::Write;

use super::{ExportRow, OutputConfig};
use crate::error::Result;
use crate::metrics::AnalysisReport;
use crate::record_set::RecordSet;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-05-12 09:00", "sender": "Alice", "body": "Hello"},
///   {"timestamp": "2023-05-12 09:05", "sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(set: &RecordSet, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(set, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(set: &RecordSet, config: &OutputConfig) -> Result<String> {
    let rows: Vec<ExportRow<'_>> = set.iter().map(|r| ExportRow::new(r, config)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Converts an analysis report to pretty-printed JSON.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes an analysis report as pretty-printed JSON.
pub fn write_report_json(report: &AnalysisReport, output_path: &str) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricsConfig;
    use crate::metrics::{SenderFilter, StopWords, analyze};
    use crate::parser::parse;
    use tempfile::NamedTempFile;

    const CHAT: &str = "12/05/23, 09:00 - Alice: Hello 🎉\n12/05/23, 09:05 - Bob: Hi";

    #[test]
    fn test_to_json_basic() {
        let set = parse(CHAT).unwrap();
        let json = to_json(&set, &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""timestamp": "2023-05-12 09:00""#));
        assert!(json.contains(r#""sender": "Alice""#));
        assert!(json.contains(r#""body": "Hello 🎉""#));
        assert!(!json.contains("hour_band"));
    }

    #[test]
    fn test_to_json_with_derived_fields() {
        let set = parse(CHAT).unwrap();
        let json = to_json(&set, &OutputConfig::new().with_derived_fields()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[1]["day_name"], "Friday");
        assert_eq!(value[1]["hour_band"], "9-10");
        assert_eq!(value[1]["minute"], 5);
    }

    #[test]
    fn test_write_report_json() {
        let set = parse(CHAT).unwrap();
        let report = analyze(
            &set,
            &SenderFilter::Overall,
            &StopWords::empty(),
            &MetricsConfig::default(),
        );

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_report_json(&report, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["selected"], "Overall");
        assert_eq!(value["basic_counts"]["messages"], 2);
        assert_eq!(value["emoji_counts"][0]["label"], "🎉");
        assert_eq!(value["top_senders"]["shares"][0]["percent"], 50.0);
    }

    #[test]
    fn test_participant_report_omits_top_senders() {
        let set = parse(CHAT).unwrap();
        let report = analyze(
            &set,
            &SenderFilter::participant("Bob"),
            &StopWords::empty(),
            &MetricsConfig::default(),
        );
        let json = report_to_json(&report).unwrap();
        assert!(!json.contains("top_senders"));
    }
}

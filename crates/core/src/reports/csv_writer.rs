//! Delimited-text serialization for report exports.

use csv::{QuoteStyle, WriterBuilder};

use super::reports_model::ReportData;
use crate::errors::{Error, Result};

/// Renders `report` as delimited text: a header row of column names
/// followed by one row per record. Every field is quoted, so embedded
/// delimiters and quote characters survive a round-trip through a
/// standard CSV reader.
pub fn to_delimited_text(report: &ReportData) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(&report.columns)?;
    for row in &report.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Serialization(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| Error::Serialization(err.to_string()))
}

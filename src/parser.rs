// CSV → RowRecords. Header row names the columns; values stay raw text.
// A structural error anywhere rejects the whole input.

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::DashboardError;
use crate::models::RowRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses `input` into rows. Blank lines are skipped; a row whose field count differs from
/// the header, or any non-UTF-8 data, fails the whole parse.
pub fn parse_records(input: &[u8]) -> Result<Vec<RowRecord>, DashboardError> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RowRecord::from_pairs(headers.iter().zip(row.iter())));
    }

    debug!(
        columns = headers.len(),
        rows = records.len(),
        "parsed csv input"
    );
    Ok(records)
}

/// Convenience for string input.
pub fn parse_str(input: &str) -> Result<Vec<RowRecord>, DashboardError> {
    parse_records(input.as_bytes())
}

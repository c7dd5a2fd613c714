//! CSV edge-list parsing
//!
//! The input is UTF-8 text whose first non-blank line is a header with
//! at least `SourceURL` and `TargetURL` columns. Blank lines are dropped
//! before the CSV reader ever sees the text, so trailing newlines and
//! blank separator lines never count as rows.

use anyhow::{Context, Result};
use serde::Deserialize;

/// One data row of the edge list: a directed source → target pair
///
/// Empty-string URLs are valid labels; no well-formedness check is done.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Row {
    #[serde(rename = "SourceURL")]
    pub source_url: String,
    #[serde(rename = "TargetURL")]
    pub target_url: String,
}

/// Parse edge-list text into rows
///
/// Empty or blank-only input yields zero rows rather than an error.
/// A row missing either column is a fatal parse error.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    // Drop empty lines up front; inputs arrive with CRLF endings and
    // stray blank lines between records.
    let filtered = text
        .lines()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if filtered.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(filtered.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let row: Row = record.with_context(|| format!("malformed CSV row {}", i + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

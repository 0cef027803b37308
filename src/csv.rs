//! CSV document rendering for report exports.
//!
//! Output contract:
//! - row 0 is the header, taken from the first record's field names in
//!   insertion order; header names are emitted raw, without quoting or
//!   escaping (callers own header-safe names);
//! - every data row carries exactly one field per header column, looked
//!   up by name: missing fields render as empty, fields absent from the
//!   header are dropped;
//! - text fields are always wrapped in `"` with interior `"` doubled;
//!   numbers and booleans are emitted unquoted; null renders as an
//!   empty field;
//! - rows are joined with `\n`.

use crate::record::{Record, Scalar};

/// MIME type attached to generated CSV downloads
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// A rendered CSV document together with its column order.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    columns: Vec<String>,
    body: String,
}

impl CsvDocument {
    /// Render a record slice into a CSV document.
    ///
    /// Returns `None` for an empty slice; an export over no records is a
    /// no-op, not an error.
    pub fn build(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let columns: Vec<String> = first.names().map(str::to_string).collect();

        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(columns.join(","));

        for record in records {
            let row: Vec<String> = columns
                .iter()
                .map(|column| render_field(record.get(column)))
                .collect();
            rows.push(row.join(","));
        }

        Some(Self {
            columns,
            body: rows.join("\n"),
        })
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rendered document text
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// The rendered document as bytes for the save interaction
    pub fn as_bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }
}

/// Render one field; absent and null fields both become empty.
fn render_field(value: Option<&Scalar>) -> String {
    match value {
        Some(Scalar::Text(text)) => quote_text(text),
        Some(Scalar::Number(number)) => number.to_string(),
        Some(Scalar::Bool(flag)) => flag.to_string(),
        Some(Scalar::Null) | None => String::new(),
    }
}

/// Wrap text in quotes, doubling any interior quote.
fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

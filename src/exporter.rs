//! Report export orchestration.
//!
//! [`TabularExporter`] turns a record slice into a CSV document and
//! hands it to the injected [`FileSaver`]. An empty slice is a silent
//! no-op: no document is built and the saver is never invoked.

use crate::csv::{CsvDocument, CSV_MIME};
use crate::error::Result;
use crate::record::Record;
use crate::saver::FileSaver;

/// Exporter turning uniform records into a saved CSV report.
#[derive(Debug, Clone)]
pub struct TabularExporter<S: FileSaver> {
    saver: S,
}

impl<S: FileSaver> TabularExporter<S> {
    /// Create an exporter over the given save capability
    pub fn new(saver: S) -> Self {
        Self { saver }
    }

    /// Export records as CSV under the given filename.
    ///
    /// The filename is passed to the saver verbatim; callers supply the
    /// `.csv` extension themselves (or use [`default_filename`]).
    /// Exactly one save interaction happens per non-empty call.
    pub fn export(&self, records: &[Record], filename: &str) -> Result<()> {
        let document = match CsvDocument::build(records) {
            Some(document) => document,
            None => return Ok(()),
        };

        self.saver.save(filename, CSV_MIME, document.as_bytes())
    }
}

/// Date-stamped report filename: `prefix-YYYY-MM-DD.csv`
pub fn default_filename(prefix: &str) -> String {
    format!("{}-{}.csv", prefix, chrono::Local::now().format("%Y-%m-%d"))
}

//! eConsultas export - client-side CSV report export and API error
//! normalization.
//!
//! This crate provides the two reusable pieces behind the eConsultas
//! client's report downloads and error toasts: turning uniform records
//! into a saved CSV document, and reducing anything caught around an API
//! call to a single displayable message.

// Core modules
pub mod error;
pub mod record;

// Export pipeline
pub mod csv;
pub mod exporter;
pub mod saver;

// Error normalization
pub mod normalize;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use csv::{CsvDocument, CSV_MIME};
pub use error::{ExportError, Result};
pub use exporter::{default_filename, TabularExporter};
pub use normalize::{
    error_message, error_message_or, CaughtError, HttpFailure, ResponsePayload,
    DEFAULT_ERROR_MESSAGE,
};
pub use record::{Record, Scalar};
pub use saver::{DiskSaver, FileSaver};

/// Export records as CSV through the given save capability
pub fn export_csv<S: FileSaver>(saver: S, records: &[Record], filename: &str) -> Result<()> {
    TabularExporter::new(saver).export(records, filename)
}

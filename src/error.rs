use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error types for the export surface.
///
/// Only the host file-save interaction is fallible. Record-shape problems
/// (empty input, missing fields) degrade to safe defaults and never show
/// up here.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save failed for '{filename}': {message}")]
    SaveFailed { filename: String, message: String },

    #[error("Invalid filename: '{filename}'")]
    InvalidFilename { filename: String },
}

impl ExportError {
    /// Create a new save failure error
    pub fn save_failed<S: Into<String>>(filename: S, message: S) -> Self {
        Self::SaveFailed {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid filename error
    pub fn invalid_filename<S: Into<String>>(filename: S) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }
}

//! Mock savers for exercising the export flow without a host.

use crate::error::{ExportError, Result};
use crate::saver::FileSaver;
use std::sync::Mutex;

/// One observed save interaction
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFile {
    pub filename: String,
    pub mime: String,
    pub contents: Vec<u8>,
}

/// Saver that records every save interaction instead of persisting it.
#[derive(Debug, Default)]
pub struct RecordingSaver {
    saves: Mutex<Vec<SavedFile>>,
}

impl RecordingSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All observed saves, in call order
    pub fn saves(&self) -> Vec<SavedFile> {
        self.saves.lock().unwrap().clone()
    }

    /// Number of save interactions observed
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl FileSaver for RecordingSaver {
    fn save(&self, filename: &str, mime: &str, contents: &[u8]) -> Result<()> {
        self.saves.lock().unwrap().push(SavedFile {
            filename: filename.to_string(),
            mime: mime.to_string(),
            contents: contents.to_vec(),
        });
        Ok(())
    }
}

/// Saver that fails every interaction, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingSaver;

impl FileSaver for FailingSaver {
    fn save(&self, filename: &str, _mime: &str, _contents: &[u8]) -> Result<()> {
        Err(ExportError::save_failed(filename, "mock saver failure"))
    }
}

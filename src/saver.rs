//! File-save capability behind the export flow.
//!
//! The exporter never touches the host directly; it talks to a
//! [`FileSaver`], so the document logic stays portable and tests can
//! observe save interactions without a real UI host.

use crate::error::{ExportError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Host capability for the save-as interaction.
pub trait FileSaver {
    /// Persist one generated document under the given filename.
    ///
    /// `mime` describes the document type; hosts without a MIME channel
    /// may ignore it.
    fn save(&self, filename: &str, mime: &str, contents: &[u8]) -> Result<()>;
}

impl<S: FileSaver + ?Sized> FileSaver for &S {
    fn save(&self, filename: &str, mime: &str, contents: &[u8]) -> Result<()> {
        (**self).save(filename, mime, contents)
    }
}

/// Saver writing into a directory the host's save dialog resolved.
///
/// Content is staged to a `.tmp` sibling first and renamed into place,
/// so an interrupted save never leaves a half-written report; the
/// staging file is removed on every failure path.
#[derive(Debug, Clone)]
pub struct DiskSaver {
    base_dir: PathBuf,
}

impl DiskSaver {
    /// Create a saver rooted at the given directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a saver rooted at the current working directory
    pub fn current_dir() -> Result<Self> {
        let current = std::env::current_dir()?;
        Ok(Self::new(current))
    }

    /// Resolve a filename inside the base directory.
    ///
    /// The name must be a single plain path component: separators and
    /// parent components are rejected so a hostile name cannot escape
    /// the directory the user picked.
    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_dir.join(filename)),
            _ => Err(ExportError::invalid_filename(filename)),
        }
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, filename: &str, _mime: &str, contents: &[u8]) -> Result<()> {
        let target = self.resolve(filename)?;
        fs::create_dir_all(&self.base_dir)?;

        let staged = StagedFile::create(&target, contents)?;
        staged.commit(&target)
    }
}

/// Staged `.tmp` sibling of the target file; removed on drop unless the
/// rename into place succeeded.
struct StagedFile {
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn create(target: &Path, contents: &[u8]) -> Result<Self> {
        let extension = target
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("temp");
        let path = target.with_extension(format!("{}.tmp", extension));
        fs::write(&path, contents)?;
        Ok(Self {
            path,
            committed: false,
        })
    }

    fn commit(mut self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

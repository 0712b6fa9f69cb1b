//! Where documents are read from and written to.
//!
//! Parsing and rendering never touch storage themselves. [`ContentSource`]
//! is the seam between them and whatever holds the documents; [`FsSource`]
//! is the filesystem implementation.

use std::fs;
use std::path::{Path, PathBuf};

use syllabus_core::{Error, Result};

/// Read/write access to document text.
pub trait ContentSource: Send + Sync {
    /// Read the document at `path`.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the document at `path` with `text`.
    fn write(&self, path: &Path, text: &str) -> Result<()>;
}

/// Documents stored as files, optionally below a root directory.
///
/// Relative paths are resolved against the root when one is set. Parent
/// directories are not created on write.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    /// Resolve paths as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// The root directory, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ContentSource for FsSource {
    fn read(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        log::debug!("Reading {}", full.display());
        fs::read_to_string(&full).map_err(|e| Error::io_with_path(e, &full))
    }

    fn write(&self, path: &Path, text: &str) -> Result<()> {
        let full = self.resolve(path);
        log::debug!("Writing {}", full.display());
        fs::write(&full, text).map_err(|e| Error::io_with_path(e, &full))
    }
}

//! Built-in render targets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{BLANK_DOCUMENT, RenderTarget};

// =============================================================================
// MemoryTarget
// =============================================================================

/// Render target that keeps the document in memory.
///
/// The session's mobile and desktop panes are memory targets; a host
/// reads the document out and feeds it to its actual preview surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTarget {
    name: String,
    document: String,
}

impl MemoryTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: String::new(),
        }
    }

    /// The last document assigned to this target.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Whether the target currently shows the blank document.
    pub fn is_blank(&self) -> bool {
        self.document == BLANK_DOCUMENT
    }
}

impl RenderTarget for MemoryTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn assign(&mut self, doc: &str) -> io::Result<()> {
        self.document = doc.to_string();
        Ok(())
    }
}

// =============================================================================
// FileTarget
// =============================================================================

/// Render target backed by a file on disk.
///
/// Useful for pointing a real browser tab at the preview: assign
/// rewrites the file, the tab reloads it.
#[derive(Debug, Clone)]
pub struct FileTarget {
    name: String,
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for FileTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn assign(&mut self, doc: &str) -> io::Result<()> {
        fs::write(&self.path, doc)
    }
}

//! Export Module - Project export in two shapes
//!
//! Exporting never serializes playground internals; it produces plain
//! web files a browser can open with no tooling:
//!
//! - **Individual files**: every fragment verbatim under its fixed
//!   filename. What you typed is what you get.
//! - **Archive set**: the same style and script files next to a
//!   rebuilt root document. The root keeps only the body content of
//!   the markup fragment and links the siblings by relative path, so
//!   the unzipped directory works standalone.
//!
//! Saving goes through the [`FileSaver`] capability; packaging the
//! archive set into a zip lives in [`archive`].

pub mod archive;

pub use archive::{ArchiveJob, ArchivePackager, ExportError, ZipPackager};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::compose::scan;
use crate::types::{ExportFile, FragmentKind, ProjectFragments};

/// Filename of the packaged archive.
pub const ARCHIVE_NAME: &str = "project.zip";

// =============================================================================
// ExportFileSet
// =============================================================================

/// Ordered set of files produced by one export.
///
/// Filenames are unique and stable: markup first, then style, then
/// script, under the names [`FragmentKind::filename`] dictates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFileSet {
    files: Vec<ExportFile>,
}

impl ExportFileSet {
    fn new(files: Vec<ExportFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[ExportFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by its filename.
    pub fn get(&self, filename: &str) -> Option<&ExportFile> {
        self.files.iter().find(|f| f.filename == filename)
    }
}

// =============================================================================
// EXPORT MODES
// =============================================================================

/// Export every fragment verbatim, one file per kind.
pub fn export_files(project: &ProjectFragments) -> ExportFileSet {
    ExportFileSet::new(
        project
            .fragments()
            .into_iter()
            .map(|fragment| ExportFile::for_kind(fragment.kind, fragment.text))
            .collect(),
    )
}

/// Export the archive file set: rebuilt root document plus verbatim
/// style and script files.
pub fn export_archive_files(project: &ProjectFragments) -> ExportFileSet {
    ExportFileSet::new(vec![
        ExportFile::new(
            FragmentKind::Markup.filename(),
            archive_index(&project.markup),
            FragmentKind::Markup.media_type(),
        ),
        ExportFile::for_kind(FragmentKind::Style, project.style.clone()),
        ExportFile::for_kind(FragmentKind::Script, project.script.clone()),
    ])
}

/// Rebuild the archive root document around the markup's body content.
///
/// The source markup's own head and html skeleton are dropped; only
/// what sits inside its body survives, wrapped in a fresh skeleton
/// that links the sibling files by relative path.
fn archive_index(markup: &str) -> String {
    let body = scan::body_span(markup);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <title>Project</title>\n  <link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n{body}\n<script src=\"script.js\"></script>\n</body>\n</html>"
    )
}

// =============================================================================
// SAVING
// =============================================================================

/// Capability to persist one exported file.
pub trait FileSaver {
    fn save(&self, filename: &str, bytes: &[u8], media_type: &str) -> io::Result<()>;
}

/// Saves exported files into a fixed directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, filename: &str, bytes: &[u8], media_type: &str) -> io::Result<()> {
        let path = self.dir.join(filename);
        log::info!("saving {} ({media_type}, {} bytes)", path.display(), bytes.len());
        fs::write(path, bytes)
    }
}

/// Save every file in the set. Stops at the first failing write.
pub fn save_all(files: &ExportFileSet, saver: &dyn FileSaver) -> io::Result<()> {
    for file in files.files() {
        saver.save(file.filename, file.content.as_bytes(), file.media_type)?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

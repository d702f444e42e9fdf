//! Archive Packaging
//!
//! Packages an export file set into a zip blob on a worker thread.
//! Packaging is a one-shot job: spawn, zip, send the result over a
//! channel, done. There is no cancellation and no timeout; the caller
//! blocks on [`ArchiveJob::wait`] when it needs the bytes.

use std::io::{Cursor, Write};
use std::sync::mpsc;
use std::thread;

use thiserror::Error;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::FileOptions;

use super::ExportFileSet;

/// Errors from packaging and persisting exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("archive packaging failed: {0}")]
    Archive(#[from] ZipError),

    #[error("archive worker vanished before reporting a result")]
    WorkerLost,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A packaging job in flight.
///
/// Produced by [`ArchivePackager::package`]; redeemed exactly once
/// with [`wait`](ArchiveJob::wait).
pub struct ArchiveJob {
    rx: mpsc::Receiver<Result<Vec<u8>, ExportError>>,
}

impl ArchiveJob {
    /// Block until the worker reports, then hand over the archive bytes.
    pub fn wait(self) -> Result<Vec<u8>, ExportError> {
        match self.rx.recv() {
            Ok(result) => result,
            // Worker panicked or was torn down with the sender
            Err(mpsc::RecvError) => Err(ExportError::WorkerLost),
        }
    }
}

/// Capability to package an export file set into archive bytes.
pub trait ArchivePackager {
    fn package(&self, files: &ExportFileSet) -> ArchiveJob;
}

/// Packages exports as deflate-compressed zip archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl ArchivePackager for ZipPackager {
    fn package(&self, files: &ExportFileSet) -> ArchiveJob {
        let files = files.clone();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = build_zip(&files);
            if let Err(ref e) = result {
                log::warn!("archive packaging failed: {e}");
            }
            let _ = tx.send(result);
        });

        ArchiveJob { rx }
    }
}

fn build_zip(files: &ExportFileSet) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files.files() {
        writer.start_file(file.filename, options)?;
        writer.write_all(file.content.as_bytes())?;
    }

    let cursor = writer.finish()?;
    log::debug!(
        "packaged {} files into {} bytes",
        files.len(),
        cursor.get_ref().len()
    );
    Ok(cursor.into_inner())
}

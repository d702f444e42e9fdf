//! External Preview
//!
//! Opens the current document outside the playground, in the system
//! browser by default. The document is persisted to a temp file, the
//! file location is handed to an opener, and the file is released
//! after a grace period long enough for the new context to load it.
//!
//! The release is a race mitigation, not a guarantee: a context that
//! re-reads the file after the grace period is on its own.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// How long an externally opened document stays on disk.
pub const RELEASE_GRACE: Duration = Duration::from_millis(2000);

/// Capability to open a location in an external context.
pub trait ContextOpener {
    fn open(&self, location: &str) -> io::Result<()>;
}

/// Opens locations in the system default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl ContextOpener for BrowserOpener {
    fn open(&self, location: &str) -> io::Result<()> {
        webbrowser::open(location)
    }
}

/// Handle to a document that was opened externally.
///
/// The path stays valid until the grace period expires.
#[derive(Debug)]
pub struct ExternalDocument {
    path: PathBuf,
}

impl ExternalDocument {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open `doc` in the system browser, releasing it after [`RELEASE_GRACE`].
pub fn open_externally(doc: &str) -> io::Result<ExternalDocument> {
    open_externally_with(doc, &BrowserOpener, RELEASE_GRACE)
}

/// Open `doc` through a custom opener with a custom grace period.
pub fn open_externally_with(
    doc: &str,
    opener: &dyn ContextOpener,
    grace: Duration,
) -> io::Result<ExternalDocument> {
    let mut file = tempfile::Builder::new()
        .prefix("spark-pen-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(doc.as_bytes())?;

    // Persist the file: the new context loads it on its own schedule,
    // not inside this call.
    let (handle, path) = file.keep().map_err(|persist| persist.error)?;
    drop(handle);

    if let Err(e) = opener.open(&format!("file://{}", path.display())) {
        let _ = fs::remove_file(&path);
        return Err(e);
    }
    log::info!("opened {} externally", path.display());

    let release_path = path.clone();
    thread::spawn(move || {
        thread::sleep(grace);
        let _ = fs::remove_file(&release_path);
    });

    Ok(ExternalDocument { path })
}

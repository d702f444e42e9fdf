//! Preview Module - Render targets and document publication
//!
//! A render target is anything that can display a composed document:
//! the session's in-memory panes, a file another process watches, or
//! whatever a host embeds. Publication pushes one document to a set of
//! targets; failures on one target never starve the others.
//!
//! Clearing is publication of the blank document, not a special mode.

pub mod external;
pub mod targets;

pub use external::{
    BrowserOpener, ContextOpener, ExternalDocument, RELEASE_GRACE, open_externally,
    open_externally_with,
};
pub use targets::{FileTarget, MemoryTarget};

use std::io;

/// The neutral document a cleared target shows.
pub const BLANK_DOCUMENT: &str = "<!doctype html><html><body></body></html>";

/// A surface that can display a composed document.
pub trait RenderTarget {
    /// Target name, used in log lines.
    fn name(&self) -> &str;

    /// Replace the displayed document.
    fn assign(&mut self, doc: &str) -> io::Result<()>;
}

/// Publish one document to every target.
///
/// Every target gets its attempt even when an earlier one fails. The
/// first error is returned once the rest have been tried.
pub fn publish(doc: &str, targets: &mut [&mut dyn RenderTarget]) -> io::Result<()> {
    let mut first_err: Option<io::Error> = None;

    for target in targets.iter_mut() {
        match target.assign(doc) {
            Ok(()) => log::trace!("published {} bytes to {}", doc.len(), target.name()),
            Err(e) => {
                log::warn!("publish to {} failed: {}", target.name(), e);
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Reset a target to the blank document.
pub fn clear(target: &mut dyn RenderTarget) -> io::Result<()> {
    log::debug!("clearing {}", target.name());
    target.assign(BLANK_DOCUMENT)
}

//! Playground Session
//!
//! Ties the reactive pipeline to the world: the session owns the
//! autorun scheduler, the preview derived, a mobile and a desktop
//! pane, and the change subscription that feeds edits into the
//! scheduler. Hosts drive it with user actions and a periodic tick.
//!
//! Building is pull-based. Edits update signals and arm the
//! scheduler; nothing renders until `run()` pulls the derived, either
//! because the user asked or because a quiet-period deadline fired in
//! `tick()`. That split is what makes debouncing possible at all: a
//! render effect would re-run on every keystroke.
//!
//! # Example
//!
//! ```ignore
//! use spark_pen::pipeline::session::{Pane, Playground};
//! use spark_pen::FragmentKind;
//! use spark_pen::fragments;
//!
//! let mut playground = Playground::new();
//!
//! // Edits debounce into a rebuild
//! fragments::set_text(FragmentKind::Style, "h1 { color: red; }");
//! loop {
//!     if playground.tick() {
//!         break; // quiet period elapsed, panes are fresh
//!     }
//! }
//!
//! println!("{}", playground.document(Pane::Desktop));
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use spark_signals::Derived;

use crate::autorun::AutorunScheduler;
use crate::export::{self, ARCHIVE_NAME, ArchivePackager, ExportError, FileSaver};
use crate::fragments::{self, editor::EditorBuffer, samples::SampleProject};
use crate::preview::{self, ContextOpener, ExternalDocument, MemoryTarget, RenderTarget};
use crate::types::{FragmentKind, MEDIA_ZIP};

use super::preview_derived::create_preview_derived;

// =============================================================================
// Panes
// =============================================================================

/// The two built-in preview panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Mobile,
    Desktop,
}

/// Prompt shown before a sample load replaces the current fragments.
pub const SAMPLE_CONFIRM_PROMPT: &str = "Replace with sample code?";

// =============================================================================
// Playground
// =============================================================================

struct AttachedEditor {
    kind: FragmentKind,
    buffer: Box<dyn EditorBuffer>,
    unhook: Option<Box<dyn FnOnce()>>,
}

/// A live playground session.
///
/// Owns the pipeline end to end:
/// - the fragment-change subscription that arms the scheduler
/// - the memoized preview derived
/// - the mobile and desktop panes
/// - any editor buffers the host attaches
///
/// Dropping the session unhooks every subscription it registered.
pub struct Playground {
    scheduler: Rc<RefCell<AutorunScheduler>>,
    preview_derived: Derived<String>,
    mobile: MemoryTarget,
    desktop: MemoryTarget,
    editors: Vec<AttachedEditor>,
    store_unhook: Option<Box<dyn FnOnce()>>,
    builds: u64,
}

impl Playground {
    /// Session with default autorun settings. Builds once immediately,
    /// so the panes show the current fragments from the first frame.
    pub fn new() -> Self {
        Self::with_scheduler(AutorunScheduler::new())
    }

    /// Session with a custom scheduler (quiet period, initial enable).
    pub fn with_scheduler(scheduler: AutorunScheduler) -> Self {
        let scheduler = Rc::new(RefCell::new(scheduler));

        let store_unhook: Box<dyn FnOnce()> = {
            let scheduler = scheduler.clone();
            Box::new(fragments::on_change(move |_| {
                scheduler.borrow_mut().note_change(Instant::now());
            }))
        };

        let mut playground = Self {
            scheduler,
            preview_derived: create_preview_derived(),
            mobile: MemoryTarget::new("mobile"),
            desktop: MemoryTarget::new("desktop"),
            editors: Vec::new(),
            store_unhook: Some(store_unhook),
            builds: 0,
        };

        playground.run();
        playground
    }

    // =========================================================================
    // Build and render
    // =========================================================================

    /// Build the preview and render it to both panes.
    ///
    /// This is the manual Run action. It bypasses the scheduler and
    /// leaves its state untouched.
    pub fn run(&mut self) {
        let doc = self.preview_derived.get();

        let mut targets: [&mut dyn RenderTarget; 2] = [&mut self.mobile, &mut self.desktop];
        if let Err(e) = preview::publish(&doc, &mut targets) {
            log::warn!("preview publish failed: {e}");
        }

        self.builds += 1;
        log::debug!("build #{} ({} bytes)", self.builds, doc.len());
    }

    /// Drive the scheduler with the current time.
    ///
    /// Returns true when a debounced rebuild fired.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Drive the scheduler with an explicit clock, for tests and hosts
    /// that own their own time source.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let fired = self.scheduler.borrow_mut().poll(now);
        if fired {
            self.run();
        }
        fired
    }

    /// Number of builds so far, the initial one included.
    pub fn build_count(&self) -> u64 {
        self.builds
    }

    // =========================================================================
    // Autorun
    // =========================================================================

    /// Enable or disable autorun. Enabling rebuilds immediately.
    pub fn set_autorun(&mut self, enabled: bool) {
        let run_now = self.scheduler.borrow_mut().set_enabled(enabled);
        if run_now {
            self.run();
        }
    }

    pub fn autorun_enabled(&self) -> bool {
        self.scheduler.borrow().is_enabled()
    }

    // =========================================================================
    // Editors
    // =========================================================================

    /// Attach an editor buffer as the editing surface for one fragment.
    ///
    /// The buffer is seeded with the fragment's current text, then
    /// every buffer edit flows into the store (and from there into the
    /// scheduler). Multiple buffers per kind are allowed; last writer
    /// wins, as with any other edit.
    pub fn attach_editor(&mut self, kind: FragmentKind, mut buffer: Box<dyn EditorBuffer>) {
        // Seed before subscribing so the seed does not echo back
        buffer.set_value(&fragments::text(kind));
        let unhook = buffer.on_change(Box::new(move |text| {
            fragments::set_text(kind, text);
        }));

        self.editors.push(AttachedEditor {
            kind,
            buffer,
            unhook: Some(unhook),
        });
    }

    /// Show the editor(s) for one fragment and hide the rest.
    ///
    /// Every attached buffer gets a refresh; a surface revealed after
    /// being hidden renders stale until poked.
    pub fn show_editor(&mut self, kind: FragmentKind) {
        for editor in &mut self.editors {
            editor.buffer.set_visible(editor.kind == kind);
            editor.buffer.refresh();
        }
    }

    /// Replace all fragments with a sample project, behind a
    /// confirmation prompt.
    ///
    /// The closure receives [`SAMPLE_CONFIRM_PROMPT`] and decides.
    /// Declining leaves fragments, panes and scheduler untouched.
    pub fn load_sample(
        &mut self,
        sample: &SampleProject,
        confirm: impl FnOnce(&str) -> bool,
    ) -> bool {
        if !confirm(SAMPLE_CONFIRM_PROMPT) {
            log::debug!("sample load declined");
            return false;
        }

        fragments::load(sample);
        for editor in &mut self.editors {
            let text = fragments::text(editor.kind);
            editor.buffer.set_value(&text);
        }
        self.run();
        true
    }

    // =========================================================================
    // Panes
    // =========================================================================

    /// The document a pane currently shows.
    pub fn document(&self, pane: Pane) -> &str {
        self.target(pane).document()
    }

    /// Reset one pane to the blank document. The other pane and the
    /// fragments are untouched; the next build repopulates it.
    pub fn clear_output(&mut self, pane: Pane) {
        if let Err(e) = preview::clear(self.target_mut(pane)) {
            log::warn!("clear failed: {e}");
        }
    }

    /// Open the document a pane currently shows in the system browser.
    pub fn open_external(&self, pane: Pane) -> io::Result<ExternalDocument> {
        preview::open_externally(self.document(pane))
    }

    /// Open a pane's document through a custom opener and grace period.
    pub fn open_external_with(
        &self,
        pane: Pane,
        opener: &dyn ContextOpener,
        grace: Duration,
    ) -> io::Result<ExternalDocument> {
        preview::open_externally_with(self.document(pane), opener, grace)
    }

    fn target(&self, pane: Pane) -> &MemoryTarget {
        match pane {
            Pane::Mobile => &self.mobile,
            Pane::Desktop => &self.desktop,
        }
    }

    fn target_mut(&mut self, pane: Pane) -> &mut MemoryTarget {
        match pane {
            Pane::Mobile => &mut self.mobile,
            Pane::Desktop => &mut self.desktop,
        }
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Save every fragment verbatim through the saver.
    pub fn save_files(&self, saver: &dyn FileSaver) -> io::Result<()> {
        let files = export::export_files(&fragments::snapshot());
        export::save_all(&files, saver)
    }

    /// Package the archive file set and save the resulting zip.
    ///
    /// Blocks on the packaging job. Nothing is saved when packaging
    /// fails; the archive is all-or-nothing.
    pub fn save_archive(
        &self,
        packager: &dyn ArchivePackager,
        saver: &dyn FileSaver,
    ) -> Result<(), ExportError> {
        let files = export::export_archive_files(&fragments::snapshot());
        let bytes = packager.package(&files).wait()?;
        saver.save(ARCHIVE_NAME, &bytes, MEDIA_ZIP)?;
        log::info!("archive saved as {ARCHIVE_NAME} ({} bytes)", bytes.len());
        Ok(())
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Playground {
    fn drop(&mut self) {
        for editor in &mut self.editors {
            if let Some(unhook) = editor.unhook.take() {
                unhook();
            }
        }
        if let Some(unhook) = self.store_unhook.take() {
            unhook();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

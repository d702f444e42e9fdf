//! # spark-pen
//!
//! Reactive live-code playground engine for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Three editable fragments (markup, style, script) live in a reactive
//! store. A memoized derived composes them into one self-contained
//! preview document; a session publishes that document to render
//! targets, debounced through an autorun scheduler. An exporter turns
//! the same fragments into plain web files, individually or packaged
//! as a zip archive.
//!
//! The pipeline is purely derived-based:
//! ```text
//! Fragment signals → previewDerived (compose) → publish to render targets
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (FragmentKind, Fragment, ExportFile, etc.)
//! - [`fragments`] - Fragment store, change listeners, editor buffers, samples
//! - [`compose`] - Composition of fragments into the preview document
//! - [`preview`] - Render targets, publication, external preview
//! - [`autorun`] - Debounced rebuild scheduling
//! - [`export`] - Export file sets, archive packaging, savers
//! - [`pipeline`] - Preview derived and the playground session

pub mod autorun;
pub mod compose;
pub mod export;
pub mod fragments;
pub mod pipeline;
pub mod preview;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use autorun::{AutorunScheduler, AutorunState, QUIET_PERIOD};

pub use compose::{ISOLATION_RULES, compose};

pub use fragments::{
    // Store
    load as load_fragments, on_change as on_fragment_change, reset_fragments_state,
    set_text as set_fragment, signal_of as fragment_signal, snapshot, text as fragment_text,
    // Editors
    editor::{EditorBuffer, ScratchBuffer},
    // Samples
    samples::{SampleProject, get_sample, sample_names},
};

pub use preview::{
    BLANK_DOCUMENT, BrowserOpener, ContextOpener, ExternalDocument, FileTarget, MemoryTarget,
    RELEASE_GRACE, RenderTarget, clear, open_externally, open_externally_with, publish,
};

pub use export::{
    ARCHIVE_NAME, ArchiveJob, ArchivePackager, DirectorySaver, ExportError, ExportFileSet,
    FileSaver, ZipPackager, export_archive_files, export_files, save_all,
};

pub use pipeline::{Pane, Playground, SAMPLE_CONFIRM_PROMPT, create_preview_derived};

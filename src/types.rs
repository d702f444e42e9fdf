//! Core types for spark-pen.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what the
//! composer and exporter understand.

use std::fmt;

// =============================================================================
// Media types
// =============================================================================

/// Media type for HTML documents and markup fragments.
pub const MEDIA_HTML: &str = "text/html";
/// Media type for stylesheet fragments.
pub const MEDIA_CSS: &str = "text/css";
/// Media type for script fragments.
pub const MEDIA_JS: &str = "application/javascript";
/// Media type for packaged archives.
pub const MEDIA_ZIP: &str = "application/zip";

// =============================================================================
// FragmentKind
// =============================================================================

/// The three editable source roles of a playground project.
///
/// Every fragment is exactly one of these. The kind decides how the
/// composer injects the text into the preview document and which
/// filename the exporter writes it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Page structure (HTML).
    Markup,
    /// Presentation rules (CSS).
    Style,
    /// Behavior (JavaScript).
    Script,
}

impl FragmentKind {
    /// All kinds, in composition order: markup first, then style, then script.
    pub const ALL: [FragmentKind; 3] = [
        FragmentKind::Markup,
        FragmentKind::Style,
        FragmentKind::Script,
    ];

    /// Short lowercase name, used in log lines and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::Markup => "markup",
            FragmentKind::Style => "style",
            FragmentKind::Script => "script",
        }
    }

    /// Filename this fragment exports to.
    ///
    /// Stable across export modes - the archive root document links
    /// against these exact names.
    pub const fn filename(&self) -> &'static str {
        match self {
            FragmentKind::Markup => "index.html",
            FragmentKind::Style => "style.css",
            FragmentKind::Script => "script.js",
        }
    }

    /// Media type of the exported file.
    pub const fn media_type(&self) -> &'static str {
        match self {
            FragmentKind::Markup => MEDIA_HTML,
            FragmentKind::Style => MEDIA_CSS,
            FragmentKind::Script => MEDIA_JS,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Fragment
// =============================================================================

/// One editable fragment: a kind plus its current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// =============================================================================
// ProjectFragments
// =============================================================================

/// A consistent snapshot of all three fragments.
///
/// Taken from the store in one call so that export and composition
/// never mix texts from different moments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFragments {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl ProjectFragments {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    /// Text for one kind.
    pub fn text(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Markup => &self.markup,
            FragmentKind::Style => &self.style,
            FragmentKind::Script => &self.script,
        }
    }

    /// Decompose into the three fragments, in composition order.
    pub fn fragments(&self) -> [Fragment; 3] {
        FragmentKind::ALL.map(|kind| Fragment::new(kind, self.text(kind)))
    }
}

// =============================================================================
// ExportFile
// =============================================================================

/// One file produced by the exporter: a fixed name, its content and
/// the media type a saver should present it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub content: String,
    pub media_type: &'static str,
}

impl ExportFile {
    pub fn new(filename: &'static str, content: impl Into<String>, media_type: &'static str) -> Self {
        Self {
            filename,
            content: content.into(),
            media_type,
        }
    }

    /// Export file for one fragment, content taken verbatim.
    pub fn for_kind(kind: FragmentKind, content: impl Into<String>) -> Self {
        Self::new(kind.filename(), content, kind.media_type())
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Preview Derived - The composition step of the reactive pipeline.
//!
//! A memoized derived over the three fragment signals. Editing any
//! fragment marks it dirty; the next `get()` recomposes the preview
//! document, and reads between edits return the memoized value.
//!
//! The derived decides *what* the preview is. *When* it reaches a
//! render target is the session's business, which is how debouncing
//! stays out of the composition path.

use spark_signals::{Derived, derived};

use crate::compose::compose;
use crate::fragments;
use crate::types::FragmentKind;

/// Create the derived that composes the preview document.
///
/// Reading the fragment signals inside the closure subscribes the
/// derived to all three. The returned handle is a plain `Derived<String>`,
/// cheap to clone and to store in a struct.
pub fn create_preview_derived() -> Derived<String> {
    let markup = fragments::signal_of(FragmentKind::Markup);
    let style = fragments::signal_of(FragmentKind::Style);
    let script = fragments::signal_of(FragmentKind::Script);

    derived(move || compose(&markup.get(), &style.get(), &script.get()))
}

//! Fragments Module - Fragment store and change notification
//!
//! Holds the authoritative text of the three fragments as signals and
//! notifies listeners on every edit. Editors write here; everything
//! downstream (composition, export) reads from here.
//!
//! Listeners run synchronously inside `set_text`, once per call, even
//! when the new text equals the old one. The autorun scheduler hangs
//! off this path and must see every keystroke the moment it lands,
//! while reactive consumers track the underlying signals instead.
//!
//! # API
//!
//! - `text(kind)` / `set_text(kind, text)` - Read and write one fragment
//! - `signal_of(kind)` - The underlying signal, for reactive consumers
//! - `snapshot()` - All three texts from one moment
//! - `load(sample)` - Replace all fragments with a sample project
//! - `on_change(listener)` - Subscribe to edits
//!
//! # Example
//!
//! ```ignore
//! use spark_pen::fragments;
//! use spark_pen::FragmentKind;
//!
//! let cleanup = fragments::on_change(|kind| {
//!     println!("{} changed", kind);
//! });
//!
//! fragments::set_text(FragmentKind::Style, "h1 { color: red; }");
//! assert!(fragments::text(FragmentKind::Style).contains("red"));
//!
//! cleanup();
//! ```

pub mod editor;
pub mod samples;

use std::cell::RefCell;

use spark_signals::{Signal, signal};

use crate::types::{FragmentKind, ProjectFragments};
use self::samples::SampleProject;

/// Listener called after a fragment edit, with the kind that changed.
pub type ChangeListener = Box<dyn Fn(FragmentKind)>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static MARKUP: Signal<String> = signal(samples::starter().markup.to_string());
    static STYLE: Signal<String> = signal(samples::starter().style.to_string());
    static SCRIPT: Signal<String> = signal(samples::starter().script.to_string());
}

struct ListenerRegistry {
    listeners: Vec<(usize, ChangeListener)>,
    next_id: usize,
}

impl ListenerRegistry {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<ListenerRegistry> = RefCell::new(ListenerRegistry::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Get the signal holding one fragment's text.
///
/// Clone it into a derived to recompose whenever the fragment changes.
pub fn signal_of(kind: FragmentKind) -> Signal<String> {
    match kind {
        FragmentKind::Markup => MARKUP.with(|s| s.clone()),
        FragmentKind::Style => STYLE.with(|s| s.clone()),
        FragmentKind::Script => SCRIPT.with(|s| s.clone()),
    }
}

/// Current text of one fragment.
pub fn text(kind: FragmentKind) -> String {
    signal_of(kind).get()
}

/// Replace one fragment's text and notify listeners.
///
/// Notification is synchronous and fires once per call, whether or not
/// the text actually differs.
pub fn set_text(kind: FragmentKind, text: impl Into<String>) {
    let text = text.into();
    log::trace!("fragment {} set ({} bytes)", kind, text.len());
    signal_of(kind).set(text);
    dispatch(kind);
}

/// Snapshot all three fragments at once.
///
/// Export and composition go through this so they never mix texts from
/// different edits.
pub fn snapshot() -> ProjectFragments {
    ProjectFragments {
        markup: text(FragmentKind::Markup),
        style: text(FragmentKind::Style),
        script: text(FragmentKind::Script),
    }
}

/// Replace all three fragments with a sample project.
///
/// Each kind is a separate edit, so listeners fire three times.
pub fn load(sample: &SampleProject) {
    log::debug!("loading sample project '{}'", sample.name);
    set_text(FragmentKind::Markup, sample.markup);
    set_text(FragmentKind::Style, sample.style);
    set_text(FragmentKind::Script, sample.script);
}

/// Subscribe to fragment edits.
/// Returns cleanup function.
pub fn on_change<F>(listener: F) -> impl FnOnce()
where
    F: Fn(FragmentKind) + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.listeners.push((id, Box::new(listener)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.listeners.retain(|(listener_id, _)| *listener_id != id);
        });
    }
}

fn dispatch(kind: FragmentKind) {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        for (_, listener) in &reg.listeners {
            listener(kind);
        }
    });
}

/// Clear all listeners.
pub fn cleanup() {
    REGISTRY.with(|reg| {
        reg.borrow_mut().listeners.clear();
    });
}

/// Reset fragment state to the starter sample (for testing).
pub fn reset_fragments_state() {
    cleanup();
    REGISTRY.with(|reg| {
        reg.borrow_mut().next_id = 0;
    });
    let sample = samples::starter();
    MARKUP.with(|s| s.set(sample.markup.to_string()));
    STYLE.with(|s| s.set(sample.style.to_string()));
    SCRIPT.with(|s| s.set(sample.script.to_string()));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_fragments_state();
    }

    #[test]
    fn test_initial_state_is_starter_sample() {
        setup();
        let sample = samples::starter();
        assert_eq!(text(FragmentKind::Markup), sample.markup);
        assert_eq!(text(FragmentKind::Style), sample.style);
        assert_eq!(text(FragmentKind::Script), sample.script);
    }

    #[test]
    fn test_set_and_read_back() {
        setup();

        set_text(FragmentKind::Style, "p { margin: 0; }");
        assert_eq!(text(FragmentKind::Style), "p { margin: 0; }");

        // Other kinds untouched
        assert_eq!(text(FragmentKind::Markup), samples::starter().markup);
        assert_eq!(text(FragmentKind::Script), samples::starter().script);
    }

    #[test]
    fn test_set_notifies_once_per_call() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = on_change(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        set_text(FragmentKind::Markup, "<p>a</p>");
        assert_eq!(count.get(), 1);

        set_text(FragmentKind::Script, "x();");
        assert_eq!(count.get(), 2);

        cleanup();

        set_text(FragmentKind::Markup, "<p>b</p>");
        assert_eq!(count.get(), 2); // No more notifications
    }

    #[test]
    fn test_set_notifies_even_when_text_is_unchanged() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = on_change(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        set_text(FragmentKind::Style, "a { color: red; }");
        set_text(FragmentKind::Style, "a { color: red; }");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_listener_receives_the_edited_kind() {
        setup();

        let last: Rc<Cell<Option<FragmentKind>>> = Rc::new(Cell::new(None));
        let last_clone = last.clone();

        let _cleanup = on_change(move |kind| {
            last_clone.set(Some(kind));
        });

        set_text(FragmentKind::Script, "y();");
        assert_eq!(last.get(), Some(FragmentKind::Script));

        set_text(FragmentKind::Markup, "<div></div>");
        assert_eq!(last.get(), Some(FragmentKind::Markup));
    }

    #[test]
    fn test_multiple_listeners_all_run() {
        setup();

        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let a_clone = a.clone();
        let b_clone = b.clone();

        let _c1 = on_change(move |_| a_clone.set(a_clone.get() + 1));
        let _c2 = on_change(move |_| b_clone.set(b_clone.get() + 1));

        set_text(FragmentKind::Style, "");
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn test_snapshot_reflects_current_texts() {
        setup();

        set_text(FragmentKind::Markup, "<main></main>");
        set_text(FragmentKind::Style, "main { display: grid; }");
        set_text(FragmentKind::Script, "boot();");

        let snap = snapshot();
        assert_eq!(snap.markup, "<main></main>");
        assert_eq!(snap.style, "main { display: grid; }");
        assert_eq!(snap.script, "boot();");
    }

    #[test]
    fn test_load_sample_sets_all_three_and_notifies_per_kind() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _cleanup = on_change(move |_| count_clone.set(count_clone.get() + 1));

        let sample = samples::counter();
        load(&sample);

        assert_eq!(count.get(), 3);
        assert_eq!(text(FragmentKind::Markup), sample.markup);
        assert_eq!(text(FragmentKind::Style), sample.style);
        assert_eq!(text(FragmentKind::Script), sample.script);
    }

    #[test]
    fn test_signal_of_tracks_edits() {
        setup();

        let style = signal_of(FragmentKind::Style);
        set_text(FragmentKind::Style, ".live { opacity: 1; }");
        assert_eq!(style.get(), ".live { opacity: 1; }");
    }

    #[test]
    fn test_reset_restores_starter_and_drops_listeners() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _cleanup = on_change(move |_| count_clone.set(count_clone.get() + 1));
        set_text(FragmentKind::Markup, "<p>temp</p>");
        assert_eq!(count.get(), 1);

        reset_fragments_state();
        assert_eq!(text(FragmentKind::Markup), samples::starter().markup);

        set_text(FragmentKind::Markup, "<p>after reset</p>");
        assert_eq!(count.get(), 1); // Old listener gone
    }
}

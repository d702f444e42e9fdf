//! Editor Buffers
//!
//! The seam between the playground and whatever editing surface hosts
//! it. The engine never talks to a concrete editor widget; it talks to
//! [`EditorBuffer`], and the host adapts its widget to that trait.
//!
//! [`ScratchBuffer`] is the built-in in-memory implementation, used by
//! tests and headless embedders. It is a cheap cloneable handle, so the
//! host can keep one clone for typing into while the session holds
//! another.

use std::cell::RefCell;
use std::rc::Rc;

/// An editable text surface for one fragment.
///
/// Implementations must fire change handlers on every edit, including
/// programmatic `set_value` calls. That mirrors how editor widgets
/// behave and is what keeps the store in sync when a sample project is
/// pushed into an attached buffer.
pub trait EditorBuffer {
    /// Current buffer contents.
    fn value(&self) -> String;

    /// Replace the buffer contents. Fires change handlers.
    fn set_value(&mut self, text: &str);

    /// Subscribe to edits. The handler receives the full new text.
    /// Returns cleanup function.
    fn on_change(&mut self, handler: Box<dyn Fn(&str)>) -> Box<dyn FnOnce()>;

    /// Show or hide the buffer's surface.
    fn set_visible(&mut self, visible: bool);

    /// Ask the surface to re-measure and redraw itself.
    ///
    /// Hosts call this after layout changes, since a surface that was
    /// hidden while edited usually renders stale until poked.
    fn refresh(&mut self);
}

// =============================================================================
// ScratchBuffer
// =============================================================================

struct ScratchInner {
    value: String,
    visible: bool,
    refreshes: usize,
    handlers: Vec<(usize, Rc<dyn Fn(&str)>)>,
    next_id: usize,
}

/// In-memory [`EditorBuffer`] with no rendering surface.
///
/// Clones share the same underlying buffer.
#[derive(Clone)]
pub struct ScratchBuffer {
    inner: Rc<RefCell<ScratchInner>>,
}

impl ScratchBuffer {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ScratchInner {
                value: initial.into(),
                visible: true,
                refreshes: 0,
                handlers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Whether the buffer is currently shown.
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    /// Number of refresh requests received (for testing).
    pub fn refresh_count(&self) -> usize {
        self.inner.borrow().refreshes
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorBuffer for ScratchBuffer {
    fn value(&self) -> String {
        self.inner.borrow().value.clone()
    }

    fn set_value(&mut self, text: &str) {
        // Handlers may read the buffer back, so the borrow must end
        // before they run.
        let handlers: Vec<Rc<dyn Fn(&str)>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = text.to_string();
            inner
                .handlers
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect()
        };
        for handler in handlers {
            handler(text);
        }
    }

    fn on_change(&mut self, handler: Box<dyn Fn(&str)>) -> Box<dyn FnOnce()> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, Rc::from(handler)));
            id
        };

        let inner = self.inner.clone();
        Box::new(move || {
            inner
                .borrow_mut()
                .handlers
                .retain(|(handler_id, _)| *handler_id != id);
        })
    }

    fn set_visible(&mut self, visible: bool) {
        self.inner.borrow_mut().visible = visible;
    }

    fn refresh(&mut self) {
        self.inner.borrow_mut().refreshes += 1;
    }
}

// =============================================================================
// TESTS
// =============================================================================

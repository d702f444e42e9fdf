//! Reactive Pipeline
//!
//! This module implements the reactive pipeline that connects fragment
//! edits to published previews.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Fragment signals → previewDerived (compose) → publish to render targets
//! Change listeners → autorun scheduler → tick → run
//! ```
//!
//! ## Data Flow
//!
//! 1. **previewDerived** - Reads the fragment signals, composes the
//!    preview document, memoizes it
//! 2. **session run** - Pulls the derived and publishes to the panes
//! 3. **autorun scheduler** - Decides *when* run happens for edits
//!
//! ## Key Design Principles
//!
//! - **Pure derived**: composition never touches targets or clocks
//! - **Pull-based rendering**: nothing renders until run() asks, which
//!   is what lets a burst of edits coalesce into one build
//! - **Side effects at the edge**: only publish and export touch the
//!   world outside the signal graph

pub mod preview_derived;
pub mod session;

// Re-exports
pub use preview_derived::create_preview_derived;
pub use session::{Pane, Playground, SAMPLE_CONFIRM_PROMPT};

//! Host capabilities - injected scroll and viewport signals.
//!
//! The visibility monitor never touches a display surface directly. It
//! reads the current scroll offset and viewport width, and subscribes to
//! scroll changes, through the [`ScrollHost`] trait. That keeps the
//! monitor testable with a hand-rolled fake and portable across hosts.
//!
//! # Example
//!
//! ```ignore
//! use animated_text::host::ScrollHost;
//!
//! fn current_threshold(host: &dyn ScrollHost) -> bool {
//!     host.scroll_offset() > 100.0
//! }
//! ```

use std::rc::Rc;

mod terminal;

pub use terminal::TerminalHost;

// =============================================================================
// CLEANUP
// =============================================================================

/// Cleanup function returned by subscriptions and components.
///
/// Call it to release the resource. `FnOnce` makes double-release
/// impossible by construction.
pub type Cleanup = Box<dyn FnOnce()>;

/// Callback invoked on every scroll event delivered by the host.
pub type ScrollCallback = Rc<dyn Fn()>;

// =============================================================================
// SCROLL HOST
// =============================================================================

/// Read access to the host's scroll and viewport signals.
///
/// Both reads are always available by construction - a host with no
/// scroll position is out of scope - so the trait has no error path.
pub trait ScrollHost {
    /// Current vertical scroll offset (px).
    fn scroll_offset(&self) -> f32;

    /// Current viewport layout width (px).
    fn viewport_width(&self) -> f32;

    /// Register a scroll listener.
    ///
    /// The callback fires on every scroll event until the returned
    /// cleanup runs. One subscription per call; subscribers are
    /// independent of each other.
    fn on_scroll(&self, callback: ScrollCallback) -> Cleanup;
}

// =============================================================================
// TEST HOST
// =============================================================================

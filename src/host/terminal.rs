//! Terminal host - crossterm-backed scroll and viewport signals.
//!
//! A terminal has no native page scroll, so this host synthesizes one:
//! mouse wheel events fed through [`TerminalHost::pump_event`] move an
//! accumulated offset (clamped at zero), and every movement notifies the
//! registered scroll listeners. Viewport width is read from the terminal
//! size on demand.
//!
//! Units are terminal cells, not CSS px - pick thresholds accordingly.
//! A terminal is always narrower than the 768-unit breakpoint, so the
//! mobile threshold is the one in effect, which suits a small surface.
//!
//! # Example
//!
//! ```ignore
//! use animated_text::host::{ScrollHost, TerminalHost};
//! use crossterm::event;
//!
//! let host = TerminalHost::new();
//! let cleanup = host.on_scroll(std::rc::Rc::new(|| { /* re-evaluate */ }));
//!
//! loop {
//!     host.pump_event(&event::read()?);
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crossterm::event::{Event, MouseEventKind};

use super::{Cleanup, ScrollCallback, ScrollHost};

/// Offset change per wheel notch (cells). Matches the usual terminal
/// wheel scroll of 3 lines.
pub const WHEEL_STEP: f32 = 3.0;

/// Width reported when the terminal size cannot be read.
const FALLBACK_WIDTH: f32 = 80.0;

// =============================================================================
// TERMINAL HOST
// =============================================================================

/// Crossterm-backed [`ScrollHost`].
///
/// Does not own stdin: the application's event loop reads crossterm
/// events and forwards them through [`pump_event`](Self::pump_event).
pub struct TerminalHost {
    offset: Cell<f32>,
    listeners: Rc<RefCell<HashMap<usize, ScrollCallback>>>,
    next_id: Cell<usize>,
    wheel_step: f32,
}

impl TerminalHost {
    /// Create a host with the standard wheel step.
    pub fn new() -> Self {
        Self::with_wheel_step(WHEEL_STEP)
    }

    /// Create a host with a custom offset change per wheel notch.
    pub fn with_wheel_step(wheel_step: f32) -> Self {
        Self {
            offset: Cell::new(0.0),
            listeners: Rc::new(RefCell::new(HashMap::new())),
            next_id: Cell::new(0),
            wheel_step,
        }
    }

    /// Feed one crossterm event into the host.
    ///
    /// Wheel-down scrolls the page down (offset grows), wheel-up scrolls
    /// back up, clamped at zero. Every offset change notifies listeners.
    /// All other events are ignored.
    pub fn pump_event(&self, event: &Event) {
        let delta = match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.wheel_step,
                MouseEventKind::ScrollUp => -self.wheel_step,
                _ => return,
            },
            _ => return,
        };

        let next = (self.offset.get() + delta).max(0.0);
        if next != self.offset.get() {
            self.offset.set(next);
            self.notify();
        }
    }

    /// Jump to an absolute offset (clamped at zero) and notify listeners.
    pub fn scroll_to(&self, offset: f32) {
        let next = offset.max(0.0);
        if next != self.offset.get() {
            self.offset.set(next);
            self.notify();
        }
    }

    /// Number of live scroll subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Collect first so a callback can unsubscribe without hitting
        // a borrow conflict on the registry.
        let callbacks: Vec<ScrollCallback> = self.listeners.borrow().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHost for TerminalHost {
    fn scroll_offset(&self) -> f32 {
        self.offset.get()
    }

    fn viewport_width(&self) -> f32 {
        match crossterm::terminal::size() {
            Ok((columns, _rows)) => columns as f32,
            Err(_) => FALLBACK_WIDTH,
        }
    }

    fn on_scroll(&self, callback: ScrollCallback) -> Cleanup {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().insert(id, callback);

        let listeners = Rc::clone(&self.listeners);
        Box::new(move || {
            listeners.borrow_mut().remove(&id);
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

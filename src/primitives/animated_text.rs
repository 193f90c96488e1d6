//! Animated Text - staggered glyph reveal driven by scroll visibility.
//!
//! The component decomposes its text into display slots, mounts a
//! visibility monitor on the injected host, and on every visibility
//! transition fans one animate call out to the container plus one per
//! glyph. Entering `visible` assigns each glyph its stagger delay, so
//! the slots reveal left to right; entering `hidden` sends everything
//! out in parallel with zero delay.
//!
//! Per-frame interpolation happens entirely inside the injected
//! [`AnimationEngine`] - this module only retargets.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use animated_text::engine::NullEngine;
//! use animated_text::host::TerminalHost;
//! use animated_text::primitives::{animated_text, AnimatedTextProps};
//!
//! let host = Rc::new(TerminalHost::new());
//! let handle = animated_text(
//!     AnimatedTextProps {
//!         text: "Hello, World!".to_string(),
//!         ..Default::default()
//!     },
//!     host,
//!     Rc::new(NullEngine),
//! );
//!
//! assert_eq!(handle.glyph_count(), 13);
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::AnimationEngine;
use crate::glyphs::DisplayText;
use crate::stagger::entry_delay;
use crate::state::VisibilityMonitor;
use crate::types::{AnimationState, Slot, ThresholdConfig};
use crate::variants::{container_variants, glyph_variants};

use super::types::AnimatedTextProps;

// =============================================================================
// FAN-OUT
// =============================================================================

/// Push the target state to the container and every glyph slot.
///
/// The container always gets delay 0 - it owns the group fade, not the
/// stagger. Glyph delays are staggered on entry and zero on exit.
fn fan_out(
    engine: &dyn AnimationEngine,
    display: &DisplayText,
    state: AnimationState,
    multiplier: f32,
) {
    engine.animate(Slot::Container, &container_variants(), state, 0.0);

    let variants = glyph_variants();
    for (i, _glyph) in display.iter() {
        let delay = if state.is_visible() {
            entry_delay(i, multiplier)
        } else {
            0.0
        };
        engine.animate(Slot::Glyph(i), &variants, state, delay);
    }
}

// =============================================================================
// ANIMATED TEXT COMPONENT
// =============================================================================

/// Create an animated text component.
///
/// Mounts a [`VisibilityMonitor`] on `host` and immediately fans the
/// mount-time state out to `engine` - the initial state is whatever the
/// current scroll position evaluates to, never unconditionally hidden.
///
/// Returns a handle for reconfiguration and teardown.
pub fn animated_text(
    props: AnimatedTextProps,
    host: Rc<dyn crate::host::ScrollHost>,
    engine: Rc<dyn AnimationEngine>,
) -> AnimatedTextHandle {
    // 1. DECOMPOSE TEXT
    let display = Rc::new(RefCell::new(DisplayText::new(&props.text)));

    // 2. MOUNT VISIBILITY MONITOR
    let multiplier = props.stagger_multiplier;
    let change_engine = Rc::clone(&engine);
    let change_display = Rc::clone(&display);
    let monitor = VisibilityMonitor::mount(
        host,
        ThresholdConfig::new(props.threshold, props.mobile_threshold),
        Rc::new(move |visible| {
            fan_out(
                change_engine.as_ref(),
                &change_display.borrow(),
                AnimationState::from_visible(visible),
                multiplier,
            );
        }),
    );

    // 3. INITIAL FAN-OUT
    fan_out(
        engine.as_ref(),
        &display.borrow(),
        AnimationState::from_visible(monitor.is_visible()),
        multiplier,
    );

    // 4. RETURN HANDLE
    AnimatedTextHandle {
        display,
        class_name: props.class_name,
        multiplier,
        engine,
        monitor: Some(monitor),
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Handle to a mounted animated text component.
///
/// Dropping the handle tears the component down (the monitor releases
/// its scroll subscription); [`unmount`](Self::unmount) does the same
/// deterministically.
pub struct AnimatedTextHandle {
    display: Rc<RefCell<DisplayText>>,
    class_name: Option<String>,
    multiplier: f32,
    engine: Rc<dyn AnimationEngine>,
    monitor: Option<VisibilityMonitor>,
}

impl AnimatedTextHandle {
    /// Current target state of the container (glyphs mirror it).
    pub fn state(&self) -> AnimationState {
        let visible = self
            .monitor
            .as_ref()
            .map(VisibilityMonitor::is_visible)
            .unwrap_or(false);
        AnimationState::from_visible(visible)
    }

    /// Number of display slots.
    pub fn glyph_count(&self) -> usize {
        self.display.borrow().len()
    }

    /// Snapshot of the current display slots.
    pub fn display_text(&self) -> DisplayText {
        self.display.borrow().clone()
    }

    /// Class name passed at construction, untouched.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Replace the text.
    ///
    /// Rebuilds the display slots (the only time they change) and
    /// re-fans the current state out so new slots start in sync.
    pub fn set_text(&self, text: &str) {
        *self.display.borrow_mut() = DisplayText::new(text);
        fan_out(
            self.engine.as_ref(),
            &self.display.borrow(),
            self.state(),
            self.multiplier,
        );
    }

    /// Replace both thresholds; takes effect immediately.
    pub fn set_thresholds(&self, threshold: f32, mobile_threshold: f32) {
        if let Some(monitor) = &self.monitor {
            monitor.set_thresholds(threshold, mobile_threshold);
        }
    }

    /// Tear the component down, releasing the scroll subscription.
    pub fn unmount(mut self) {
        if let Some(monitor) = self.monitor.take() {
            monitor.unmount();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

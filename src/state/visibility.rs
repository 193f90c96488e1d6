//! Visibility Monitor - scroll offset to visibility flag.
//!
//! Owns the single boolean that drives the whole animation: whether the
//! page has been scrolled past the breakpoint-selected threshold. The
//! flag is computed synchronously at mount from the current host
//! readings, recomputed on every scroll event, and consumers are
//! notified only when the value actually changes.
//!
//! The monitor is stateless with respect to history: every evaluation
//! reads the current scroll offset and viewport width fresh, so missed
//! or repeated samples are harmless.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use animated_text::state::VisibilityMonitor;
//! use animated_text::types::ThresholdConfig;
//!
//! let monitor = VisibilityMonitor::mount(
//!     host,
//!     ThresholdConfig::default(),
//!     Rc::new(|visible| println!("visible: {}", visible)),
//! );
//!
//! let showing = monitor.is_visible();
//!
//! // Later, on teardown:
//! monitor.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::host::{Cleanup, ScrollHost};
use crate::types::ThresholdConfig;

/// Callback invoked with the new value whenever visibility flips.
pub type VisibilityCallback = Rc<dyn Fn(bool)>;

// =============================================================================
// VISIBILITY MONITOR
// =============================================================================

/// Tracks `scroll_offset > threshold` for one mounted component.
///
/// Holds exactly one scroll subscription from mount until teardown.
/// [`unmount`](Self::unmount) releases it deterministically; `Drop` is
/// the fallback if the handle is simply dropped.
pub struct VisibilityMonitor {
    visible: Rc<Cell<bool>>,
    config: Rc<RefCell<ThresholdConfig>>,
    host: Rc<dyn ScrollHost>,
    on_change: VisibilityCallback,
    unsubscribe: Option<Cleanup>,
}

impl VisibilityMonitor {
    /// Mount the monitor.
    ///
    /// The initial flag is evaluated synchronously from the host's
    /// current scroll offset and viewport width - first render matches
    /// reality rather than a default constant. `on_change` is NOT
    /// invoked for the initial value; read it with
    /// [`is_visible`](Self::is_visible).
    pub fn mount(
        host: Rc<dyn ScrollHost>,
        config: ThresholdConfig,
        on_change: VisibilityCallback,
    ) -> Self {
        let visible = Rc::new(Cell::new(
            config.evaluate(host.scroll_offset(), host.viewport_width()),
        ));
        let config = Rc::new(RefCell::new(config));

        // The listener lives inside the host's registry, so it must not
        // hold a strong reference back to the host.
        let listener_host: Weak<dyn ScrollHost> = Rc::downgrade(&host);
        let listener_visible = Rc::clone(&visible);
        let listener_config = Rc::clone(&config);
        let listener_on_change = Rc::clone(&on_change);

        let unsubscribe = host.on_scroll(Rc::new(move || {
            let Some(host) = listener_host.upgrade() else {
                return;
            };
            // Config is read through the shared cell on every event, so
            // reconfigured thresholds take effect immediately - no stale
            // capture from mount time.
            let next = listener_config
                .borrow()
                .evaluate(host.scroll_offset(), host.viewport_width());
            if next != listener_visible.get() {
                listener_visible.set(next);
                listener_on_change(next);
            }
        }));

        Self {
            visible,
            config,
            host,
            on_change,
            unsubscribe: Some(unsubscribe),
        }
    }

    /// Current visibility flag.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Thresholds currently in effect.
    pub fn thresholds(&self) -> ThresholdConfig {
        *self.config.borrow()
    }

    /// Replace both thresholds and re-evaluate immediately.
    ///
    /// Subsequent scroll events are judged against the new values. If
    /// the re-evaluation flips the flag, the change callback fires.
    pub fn set_thresholds(&self, threshold: f32, mobile_threshold: f32) {
        *self.config.borrow_mut() = ThresholdConfig::new(threshold, mobile_threshold);

        let next = self
            .config
            .borrow()
            .evaluate(self.host.scroll_offset(), self.host.viewport_width());
        if next != self.visible.get() {
            self.visible.set(next);
            (self.on_change)(next);
        }
    }

    /// Release the scroll subscription.
    ///
    /// After this, scroll events reach no monitor code at all - the
    /// listener is gone from the host's registry.
    pub fn unmount(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for VisibilityMonitor {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::FakeHost;

    fn change_log() -> (VisibilityCallback, Rc<RefCell<Vec<bool>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_in_callback = Rc::clone(&log);
        let callback: VisibilityCallback = Rc::new(move |visible| {
            log_in_callback.borrow_mut().push(visible);
        });
        (callback, log)
    }

    #[test]
    fn test_initial_state_from_current_scroll() {
        // Spec example: mobile_threshold=50, width=500, scroll=60
        let host = FakeHost::new(60.0, 500.0);
        let (callback, log) = change_log();
        let monitor = VisibilityMonitor::mount(host, ThresholdConfig::default(), callback);

        assert!(monitor.is_visible());
        // Initial value is read, not announced
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_initial_state_desktop_threshold() {
        // Same scroll on a desktop width: 60 <= 100, hidden
        let host = FakeHost::new(60.0, 1024.0);
        let (callback, _log) = change_log();
        let monitor = VisibilityMonitor::mount(host, ThresholdConfig::default(), callback);

        assert!(!monitor.is_visible());
    }

    #[test]
    fn test_scroll_toggles_both_ways() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);
        assert!(!monitor.is_visible());

        host.emit_scroll(150.0);
        assert!(monitor.is_visible());

        host.emit_scroll(20.0);
        assert!(!monitor.is_visible());

        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_idempotent_samples_fire_no_callback() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);

        host.emit_scroll(150.0);
        host.emit_scroll(150.0);
        host.emit_scroll(160.0); // still visible, no change
        assert!(monitor.is_visible());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_repeated_toggles_end_in_last_target() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);

        for _ in 0..5 {
            host.emit_scroll(150.0);
            host.emit_scroll(0.0);
        }
        host.emit_scroll(150.0);

        assert!(monitor.is_visible());
        assert_eq!(log.borrow().len(), 11);
        assert_eq!(log.borrow().last(), Some(&true));
    }

    #[test]
    fn test_exact_threshold_keeps_state() {
        let host = FakeHost::new(150.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);
        assert!(monitor.is_visible());

        // Exactly 100 is not > 100, so the flag drops
        host.emit_scroll(100.0);
        assert!(!monitor.is_visible());

        // From hidden, landing exactly on the threshold stays hidden
        host.emit_scroll(100.0);
        assert!(!monitor.is_visible());
        assert_eq!(*log.borrow(), vec![false]);
    }

    #[test]
    fn test_set_thresholds_reevaluates_immediately() {
        let host = FakeHost::new(60.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);
        assert!(!monitor.is_visible());

        // Lowering the desktop threshold below the current offset flips
        // the flag without any new scroll event
        monitor.set_thresholds(40.0, 20.0);
        assert!(monitor.is_visible());
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_scroll_after_reconfigure_uses_new_values() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, _log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);

        monitor.set_thresholds(200.0, 20.0);
        assert_eq!(monitor.thresholds(), ThresholdConfig::new(200.0, 20.0));

        // 150 was above the old desktop threshold but not the new one
        host.emit_scroll(150.0);
        assert!(!monitor.is_visible());

        host.emit_scroll(250.0);
        assert!(monitor.is_visible());
    }

    #[test]
    fn test_breakpoint_selects_threshold_per_event() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, _log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);

        // 60 is below the desktop threshold
        host.emit_scroll(60.0);
        assert!(!monitor.is_visible());

        // Same offset on a mobile width clears the mobile threshold
        host.set_width(500.0);
        host.emit_scroll(60.0);
        assert!(monitor.is_visible());
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, log) = change_log();
        let monitor =
            VisibilityMonitor::mount(Rc::clone(&host) as _, ThresholdConfig::default(), callback);
        assert_eq!(host.listener_count(), 1);

        monitor.unmount();
        assert_eq!(host.listener_count(), 0);

        // A scroll after teardown computes nothing
        host.emit_scroll(500.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let host = FakeHost::new(0.0, 1024.0);
        let (callback, _log) = change_log();
        {
            let _monitor = VisibilityMonitor::mount(
                Rc::clone(&host) as _,
                ThresholdConfig::default(),
                callback,
            );
            assert_eq!(host.listener_count(), 1);
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_one_subscription_per_instance() {
        let host = FakeHost::new(0.0, 1024.0);
        let (first_callback, _) = change_log();
        let (second_callback, _) = change_log();

        let _first = VisibilityMonitor::mount(
            Rc::clone(&host) as _,
            ThresholdConfig::default(),
            first_callback,
        );
        let _second = VisibilityMonitor::mount(
            Rc::clone(&host) as _,
            ThresholdConfig::default(),
            second_callback,
        );

        assert_eq!(host.listener_count(), 2);
    }
}

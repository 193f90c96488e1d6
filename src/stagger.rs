//! Stagger timing - pure per-child delay computation.
//!
//! The left-to-right "typewriter" reveal comes from delaying each
//! glyph's entry by a fixed interval times its display index. The
//! computation is a pure function of the index and two constants, so
//! ordering is directly testable without any animation engine.

/// Extra delay between consecutive glyph entries (seconds).
pub const STAGGER_INTERVAL: f32 = 0.03;

/// Delay before the first glyph's entry (seconds), before scaling.
pub const BASE_CHILD_DELAY: f32 = 0.04;

/// Entry delay for the glyph at display position `i`.
///
/// Monotonically non-decreasing in `i` for any non-negative
/// `interval`, which is what guarantees glyph 0 starts before glyph 1.
pub fn child_delay(i: usize, base_delay: f32, interval: f32) -> f32 {
    base_delay + i as f32 * interval
}

/// Entry delay using the standard constants, scaled by `multiplier`.
///
/// The multiplier scales the base delay only, matching the container
/// contract: the gap between neighbors stays [`STAGGER_INTERVAL`].
pub fn entry_delay(i: usize, multiplier: f32) -> f32 {
    child_delay(i, BASE_CHILD_DELAY * multiplier, STAGGER_INTERVAL)
}

// =============================================================================
// TESTS
// =============================================================================

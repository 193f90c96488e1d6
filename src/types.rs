//! Core types - animation state, thresholds, slot identity.
//!
//! These types are shared by the visibility monitor, the glyph renderer,
//! and the animation engine seam. They carry no behavior beyond the
//! threshold evaluation rule and a few convenience helpers.

// =============================================================================
// ANIMATION STATE
// =============================================================================

/// Target state for the container and every glyph.
///
/// The state machine is bistable: `Hidden <-> Visible`, driven entirely
/// by the visibility flag. There is no terminal state - scroll can
/// toggle it indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Faded out, offset from rest position.
    #[default]
    Hidden,
    /// Fully opaque at rest position.
    Visible,
}

impl AnimationState {
    /// Map the visibility flag to its target state.
    pub fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }

    /// True if this is the `Visible` state.
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Viewport width (px) at or below which the mobile threshold applies.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Scroll thresholds for desktop and mobile viewports.
///
/// The breakpoint is fixed at [`MOBILE_BREAKPOINT`]; the two thresholds
/// are supplied by the caller and stay valid for the component's
/// lifetime unless explicitly replaced.
///
/// Both thresholds must be non-negative. A negative threshold is a
/// contract violation, checked in debug builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    /// Scroll offset (px) above which desktop viewports are visible.
    pub threshold: f32,
    /// Same, for viewports with width <= 768 px.
    pub mobile_threshold: f32,
}

impl ThresholdConfig {
    /// Create a threshold config.
    pub fn new(threshold: f32, mobile_threshold: f32) -> Self {
        debug_assert!(threshold >= 0.0, "threshold must be non-negative");
        debug_assert!(
            mobile_threshold >= 0.0,
            "mobile_threshold must be non-negative"
        );
        Self {
            threshold,
            mobile_threshold,
        }
    }

    /// Select the threshold in effect for the given viewport width.
    pub fn select(&self, viewport_width: f32) -> f32 {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.mobile_threshold
        } else {
            self.threshold
        }
    }

    /// Evaluate visibility for a scroll sample.
    ///
    /// Uses strict `>`: a scroll offset exactly at the threshold does not
    /// count as visible, so sitting on the boundary keeps whatever state
    /// was last computed.
    pub fn evaluate(&self, scroll_offset: f32, viewport_width: f32) -> bool {
        scroll_offset > self.select(viewport_width)
    }
}

impl Default for ThresholdConfig {
    /// Defaults match the public prop table: desktop 100 px, mobile 50 px.
    fn default() -> Self {
        Self::new(100.0, 50.0)
    }
}

// =============================================================================
// SLOT IDENTITY
// =============================================================================

/// Identifies one animatable unit of a mounted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The group container (owns the stagger timing).
    Container,
    /// Glyph at display position `i` (0-based, left to right).
    Glyph(usize),
}

// =============================================================================
// TESTS
// =============================================================================

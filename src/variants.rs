//! Animation variants - named hidden/visible style targets.
//!
//! A variant set pairs two style descriptors under the names `hidden`
//! and `visible`, plus the motion curve used to travel between them.
//! Both states are the same struct type, so every interpolation between
//! them is well-defined by construction.
//!
//! The core never interpolates - it hands a variant set and a target
//! state name to the animation engine and lets it run.

use crate::types::AnimationState;

// =============================================================================
// STYLE TARGET
// =============================================================================

/// Style descriptor for one named state.
///
/// Offsets are in layout units relative to the rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTarget {
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Horizontal offset from rest.
    pub x: f32,
    /// Vertical offset from rest (positive = down).
    pub y: f32,
}

impl StyleTarget {
    /// Fully opaque, at rest.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };
}

// =============================================================================
// MOTION CURVE
// =============================================================================

/// Time-response shape of a property transition.
///
/// The parameters describe curve shape for the engine; exact numeric
/// reproduction is the engine's concern, not the core's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCurve {
    /// Spring response. With damping 12 / stiffness 100 the response is
    /// close to critically damped - settles without large overshoot.
    Spring { damping: f32, stiffness: f32 },
}

/// Spring damping used by the glyph transition.
pub const GLYPH_SPRING_DAMPING: f32 = 12.0;

/// Spring stiffness used by the glyph transition.
pub const GLYPH_SPRING_STIFFNESS: f32 = 100.0;

// =============================================================================
// VARIANT SET
// =============================================================================

/// A named pair of style targets and the curve between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSet {
    /// Style when the `hidden` state is targeted.
    pub hidden: StyleTarget,
    /// Style when the `visible` state is targeted.
    pub visible: StyleTarget,
    /// Curve used for transitions in both directions.
    pub curve: MotionCurve,
}

impl VariantSet {
    /// The style target for a named state.
    pub fn target(&self, state: AnimationState) -> StyleTarget {
        match state {
            AnimationState::Hidden => self.hidden,
            AnimationState::Visible => self.visible,
        }
    }
}

/// Variant set for each glyph.
///
/// Hidden glyphs sit down-left of their rest position, fully
/// transparent; visible glyphs are at rest, fully opaque.
pub fn glyph_variants() -> VariantSet {
    VariantSet {
        hidden: StyleTarget {
            opacity: 0.0,
            x: -20.0,
            y: 10.0,
        },
        visible: StyleTarget::REST,
        curve: MotionCurve::Spring {
            damping: GLYPH_SPRING_DAMPING,
            stiffness: GLYPH_SPRING_STIFFNESS,
        },
    }
}

/// Variant set for the container.
///
/// The container only fades as a group; per-glyph movement is carried
/// by [`glyph_variants`]. Stagger timing is computed separately and
/// attached to each child's animate call.
pub fn container_variants() -> VariantSet {
    VariantSet {
        hidden: StyleTarget {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
        },
        visible: StyleTarget::REST,
        curve: MotionCurve::Spring {
            damping: GLYPH_SPRING_DAMPING,
            stiffness: GLYPH_SPRING_STIFFNESS,
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Animation engine seam - the interpolation delegate.
//!
//! The core decides WHAT each slot should look like (a variant set, a
//! target state name, an entry delay); the engine decides HOW the style
//! gets there over time. Calls are fire-and-forget: the engine runs its
//! own per-frame loop and reports nothing back.

use crate::types::{AnimationState, Slot};
use crate::variants::VariantSet;

// =============================================================================
// ENGINE TRAIT
// =============================================================================

/// Interpolation capability consumed by the glyph renderer.
///
/// Implementations interpolate the slot's style from wherever it
/// currently is toward `variants.target(state)`, starting after
/// `delay` seconds, following `variants.curve`.
pub trait AnimationEngine {
    /// Retarget one slot. Fire-and-forget.
    fn animate(&self, slot: Slot, variants: &VariantSet, state: AnimationState, delay: f32);
}

// =============================================================================
// NULL ENGINE
// =============================================================================

/// Engine that drops every call. Useful for headless mounting.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEngine;

impl AnimationEngine for NullEngine {
    fn animate(&self, _slot: Slot, _variants: &VariantSet, _state: AnimationState, _delay: f32) {}
}

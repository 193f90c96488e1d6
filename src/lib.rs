//! # animated-text
//!
//! Scroll-triggered staggered text animation component.
//!
//! Renders a string as individually animated glyphs that fade and slide
//! into view once the host has been scrolled past a breakpoint-selected
//! threshold, and reverse out when scrolled back above it. The only
//! logic that lives here is the translation from a scalar scroll
//! position to per-glyph animation targets - per-frame interpolation is
//! delegated to an injected [`engine::AnimationEngine`].
//!
//! ## Architecture
//!
//! ```text
//! host scroll event → VisibilityMonitor → visible flag change
//!                                           ↓
//!               animated_text fan-out: container + one call per glyph
//!                                           ↓
//!                       AnimationEngine (interpolates off-core)
//! ```
//!
//! Host signals (scroll offset, viewport width) are injected through
//! [`host::ScrollHost`], so the component runs against a real terminal
//! ([`host::TerminalHost`]), a browser bridge, or a test fake alike.
//!
//! ## Modules
//!
//! - [`types`] - Core types (AnimationState, ThresholdConfig, Slot)
//! - [`host`] - Injected scroll/viewport capabilities
//! - [`glyphs`] - Code-point decomposition into display slots
//! - [`variants`] - Named hidden/visible style targets and spring curve
//! - [`stagger`] - Per-glyph entry delay computation
//! - [`engine`] - Interpolation delegate seam
//! - [`state`] - Visibility monitor
//! - [`primitives`] - The animated text component

pub mod engine;
pub mod glyphs;
pub mod host;
pub mod primitives;
pub mod stagger;
pub mod state;
pub mod types;
pub mod variants;

// Re-export commonly used items
pub use types::*;

pub use engine::{AnimationEngine, NullEngine};

pub use glyphs::{DisplayText, NBSP};

pub use host::{Cleanup, ScrollCallback, ScrollHost, TerminalHost};

pub use stagger::{child_delay, entry_delay, BASE_CHILD_DELAY, STAGGER_INTERVAL};

pub use variants::{
    container_variants, glyph_variants, MotionCurve, StyleTarget, VariantSet,
};

pub use state::{VisibilityCallback, VisibilityMonitor};

pub use primitives::{animated_text, AnimatedTextHandle, AnimatedTextProps};

//! Primitive types - props for the animated text component.

// =============================================================================
// ANIMATED TEXT PROPS
// =============================================================================

/// Properties for the animated text component.
///
/// Only `text` is required; everything else has the documented default.
///
/// | Prop                 | Default | Effect                                  |
/// |----------------------|---------|-----------------------------------------|
/// | `text`               | `""`    | source string, rendered glyph by glyph  |
/// | `class_name`         | `None`  | carried on the handle, no semantics     |
/// | `threshold`          | `100.0` | desktop scroll threshold (px)           |
/// | `mobile_threshold`   | `50.0`  | threshold for widths <= 768 px          |
/// | `stagger_multiplier` | `1.0`   | scales the base child delay             |
///
/// # Example
///
/// ```ignore
/// use animated_text::primitives::{animated_text, AnimatedTextProps};
///
/// let handle = animated_text(
///     AnimatedTextProps {
///         text: "Hello, World!".to_string(),
///         ..Default::default()
///     },
///     host,
///     engine,
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedTextProps {
    /// Source string to render letter by letter.
    pub text: String,
    /// Passed through to the root container untouched.
    pub class_name: Option<String>,
    /// Scroll offset (px) above which desktop viewports are visible.
    pub threshold: f32,
    /// Same, for viewports with width <= 768 px.
    pub mobile_threshold: f32,
    /// Scales the delay before the first glyph's entry.
    pub stagger_multiplier: f32,
}

impl Default for AnimatedTextProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            class_name: None,
            threshold: 100.0,
            mobile_threshold: 50.0,
            stagger_multiplier: 1.0,
        }
    }
}

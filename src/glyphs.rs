//! DisplayText - code point decomposition for per-glyph animation.
//!
//! Splits a source string into individually animatable display slots.
//! One slot per Unicode code point - not per UTF-8 byte or UTF-16 unit -
//! so multi-byte characters get exactly one slot each.
//!
//! Whitespace code points are substituted with U+00A0 NO-BREAK SPACE so
//! they keep their layout width while still receiving their own slot in
//! the stagger sequence.
//!
//! # Example
//!
//! ```ignore
//! use animated_text::glyphs::DisplayText;
//!
//! let display = DisplayText::new("Hi there");
//! assert_eq!(display.len(), 8);
//! assert_eq!(display.glyph(2), Some('\u{00A0}')); // space slot
//! ```

/// Rendered substitute for whitespace code points.
pub const NBSP: char = '\u{00A0}';

// =============================================================================
// DISPLAY TEXT
// =============================================================================

/// An ordered sequence of display slots derived from a source string.
///
/// Immutable once built. Rebuilt only when the source text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    glyphs: Vec<char>,
}

impl DisplayText {
    /// Decompose `text` into display slots.
    ///
    /// Empty input yields an empty sequence - zero slots, no error.
    pub fn new(text: &str) -> Self {
        let glyphs = text
            .chars()
            .map(|c| if c.is_whitespace() { NBSP } else { c })
            .collect();
        Self { glyphs }
    }

    /// Number of display slots (equals the code-point count of the source).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if the source string had no code points.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at display position `i`, or None past the end.
    pub fn glyph(&self, i: usize) -> Option<char> {
        self.glyphs.get(i).copied()
    }

    /// Iterate over (display index, glyph) pairs left to right.
    pub fn iter(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.glyphs.iter().copied().enumerate()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! State Module - runtime state for mounted components.
//!
//! - **Visibility** - scroll-driven visibility flag with threshold
//!   selection and change notification

mod visibility;

pub use visibility::*;

//! Primitives - the animated text component.
//!
//! Components are functions taking a props struct and the injected
//! capabilities (host, engine), returning a handle that owns the
//! component's subscriptions:
//!
//! ```ignore
//! let handle = animated_text(
//!     AnimatedTextProps { text: "Hello".to_string(), ..Default::default() },
//!     host,
//!     engine,
//! );
//!
//! // Later:
//! handle.unmount();
//! ```

mod animated_text;
mod types;

pub use animated_text::{animated_text, AnimatedTextHandle};
pub use types::AnimatedTextProps;

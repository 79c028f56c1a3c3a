//! Style primitives - small value types with CSS output
//!
//! Each primitive:
//! - `to_css()` → CSS declaration string
//! - `describe()` → plain English, used in titles and logs

#[macro_use]
pub mod bounded;
pub mod opacity;
pub mod rect;

pub use opacity::Opacity;
pub use rect::Rect;

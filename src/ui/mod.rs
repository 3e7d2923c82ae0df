//! UI-facing pure logic: keyboard commands and responsive breakpoints.
//!
//! No rendering lives here — only the decisions a render layer needs,
//! expressed as data-in/data-out functions it can call from any toolkit.

pub mod keys;
pub mod layout;

pub use keys::{KeyInput, UiCommand};
pub use layout::{Breakpoint, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

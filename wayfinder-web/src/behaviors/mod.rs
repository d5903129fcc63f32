//! Event wiring for each page behavior.
//!
//! Each `install` queries what it needs once, attaches its listeners, and
//! leaves the page untouched when its elements are missing.

pub mod contrast;
pub mod menu;
pub mod scroll_spy;

pub use scroll_spy::ScrollSpy;

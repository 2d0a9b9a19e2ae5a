//! Page widget logic that does not need a DOM.
//!
//! The `dom` adapters read element state into these types, call them, and
//! write the result back.

pub mod anchor;
pub mod menu;
pub mod slider;
pub mod video;

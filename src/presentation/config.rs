//! UI configuration
//!
//! Key bindings are grouped per screen.

pub mod keybindings;

pub use keybindings::{Action, KeyBindings};

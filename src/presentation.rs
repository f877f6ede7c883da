//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Screen components
//! - Reusable widgets
//! - Screen geometry shared with the input translator
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;

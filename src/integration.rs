//! Integration layer
//!
//! Wires the Elm core to a terminal:
//! - Runtime holding state and message/command queues
//! - AppRunner driving the event loop over a `TuiLike` terminal

pub mod app_runner;
pub mod runtime;

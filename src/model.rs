//! Screen-local models
//!
//! Each model owns its state and exposes an `update(Message)` that the core
//! update function delegates to.

pub mod carousel;
pub mod reviews;
pub mod status_bar;

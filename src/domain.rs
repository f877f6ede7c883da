//! Domain types
//!
//! Plain data and pure helpers with no terminal or runtime dependencies.

pub mod card;
pub mod review;
pub mod route;
pub mod text;

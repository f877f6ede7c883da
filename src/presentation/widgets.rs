//! Reusable UI widgets
//!
//! Widgets borrow the data they draw and hold no state of their own.

pub mod card;
pub mod review_card;
pub mod status_bar;
pub mod tab_bar;

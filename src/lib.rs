//! # Jarijapda
//!
//! A terminal front end for browsing storefront concept suggestions, built
//! with Ratatui. The landing screen shows reviews and a start button; the
//! suggestion screen shows a carousel of concept cards that can be stepped
//! with keys, clicks or mouse swipes.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Raw message** (`core::raw_msg`): terminal events as they arrive
//! - **Translator** (`core::translator`): raw messages to domain messages
//! - **State** (`core::state`): the mounted screen and system flags
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects for the host to execute
//! - **View** (`presentation`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use jarijapda::{
//!     core::{msg::Msg, state::AppState, update::update},
//!     domain::route::Route,
//!     model::carousel::Message,
//! };
//!
//! let state = AppState::default();
//! let (state, _commands) = update(Msg::Navigate(Route::LocationSuggest), state);
//! let (state, _commands) = update(Msg::Carousel(Message::Advance), state);
//!
//! assert_eq!(state.carousel().map(|c| c.current()), Some(4));
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

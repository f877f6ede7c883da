//! Infrastructure layer
//!
//! Terminal I/O, command line parsing and configuration loading.

pub mod cli;
pub mod config;
pub mod tui;

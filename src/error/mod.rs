//! Error handling module
//!
//! Defines the CLI error taxonomy with exit codes

pub mod types;

pub use types::*;

//! Command-line interface module
//!
//! Handles parsing of global options

pub mod args;

pub use args::*;

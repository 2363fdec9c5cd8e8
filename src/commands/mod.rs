//! Command groups shipped with the CLI
//!
//! Each submodule builds one top-level group and holds its handlers.

pub mod app;
pub mod cluster;
pub mod image;

//! Command registry
//!
//! Assembles the static command tree and checks it once at startup.

pub mod validation;

use crate::commands::{app, cluster, image};
use crate::error::CliError;
use crate::tree::Group;
use tracing::debug;

/// Name of the root group, used as the program name in usage lines
pub const ROOT_NAME: &str = "cli";

/// Build and validate the full command tree
///
/// # Errors
///
/// Returns `CliError::Registration` if the tree is malformed. The tree is
/// static, so this only happens when a command is declared incorrectly.
#[inline]
pub fn register() -> Result<Group, CliError> {
    let root = Group::new(ROOT_NAME, "")
        .group(app::group())
        .group(image::group())
        .group(cluster::group());

    validation::validate_tree(&root)?;
    debug!("Registered command tree with {} groups", root.children().len());

    Ok(root)
}

/// Owner of the command tree for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Registry {
    root: Group,
}

impl Registry {
    /// Register the shipped command tree
    ///
    /// # Errors
    ///
    /// Returns an error if the tree fails validation
    #[inline]
    pub fn build() -> Result<Self, CliError> {
        Ok(Self { root: register()? })
    }

    /// Wrap an arbitrary tree after validating it
    ///
    /// # Errors
    ///
    /// Returns an error if the tree fails validation
    #[inline]
    pub fn from_root(root: Group) -> Result<Self, CliError> {
        validation::validate_tree(&root)?;
        Ok(Self { root })
    }

    /// Root group of the tree
    #[must_use]
    #[inline]
    pub const fn root(&self) -> &Group {
        &self.root
    }
}

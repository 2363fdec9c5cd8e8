//! Command tree validation logic

use crate::error::CliError;
use crate::tree::{CommandNode, Group, Leaf};
use std::collections::HashSet;

/// Validate a complete command tree
///
/// # Errors
///
/// Returns an error if:
/// - Two siblings share a name
/// - A command or group name is empty, contains whitespace or starts with `-`
/// - A group has no children
/// - A leaf declares the same argument twice
#[inline]
pub fn validate_tree(root: &Group) -> Result<(), CliError> {
    validate_group(root, root.name())
}

fn validate_group(group: &Group, path: &str) -> Result<(), CliError> {
    if group.children().is_empty() {
        return Err(CliError::registration(format!(
            "Group '{path}' has no commands"
        )));
    }

    let mut seen = HashSet::new();
    for child in group.children() {
        let name = child.name();
        let child_path = format!("{path} {name}");

        validate_name(name, path)?;
        if !seen.insert(name) {
            return Err(CliError::registration(format!(
                "Duplicate command '{name}' in group '{path}'"
            )));
        }

        match child {
            CommandNode::Leaf(leaf) => validate_leaf(leaf, &child_path)?,
            CommandNode::Group(nested) => validate_group(nested, &child_path)?,
        }
    }

    Ok(())
}

fn validate_leaf(leaf: &Leaf, path: &str) -> Result<(), CliError> {
    let mut seen = HashSet::new();
    for argument in leaf.arguments() {
        if argument.name().trim().is_empty() {
            return Err(CliError::registration(format!(
                "Command '{path}' has an unnamed argument"
            )));
        }
        if !seen.insert(argument.name()) {
            return Err(CliError::registration(format!(
                "Command '{path}' declares argument '{}' twice",
                argument.name()
            )));
        }
    }
    Ok(())
}

fn validate_name(name: &str, parent: &str) -> Result<(), CliError> {
    if name.is_empty() {
        return Err(CliError::registration(format!(
            "Group '{parent}' has a command with an empty name"
        )));
    }
    if name.chars().any(char::is_whitespace) || name.starts_with('-') {
        return Err(CliError::registration(format!(
            "Invalid command name '{name}' in group '{parent}'"
        )));
    }
    Ok(())
}

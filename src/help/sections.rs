//! Intermediate representation of a group's commands
//!
//! Help for a group is built in three pure passes: `collect_section` mirrors
//! the tree, `qualify` rewrites leaf names into paths, and `list_commands`
//! splits the result into the main block and one block per child group.

use crate::tree::{CommandNode, Group};
use serde::Serialize;

/// A group's commands as seen by the help formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub help: String,
    pub items: Vec<Item>,
}

/// Entry of a `Section`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Section(Section),
    Command { name: String, help: String },
}

/// One row of a definition list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpRow {
    pub name: String,
    pub help: String,
}

impl HelpRow {
    #[must_use]
    #[inline]
    pub fn new<N: Into<String>, H: Into<String>>(name: N, help: H) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
        }
    }
}

/// All leaves below one child group, with qualified names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionListing {
    pub name: String,
    pub commands: Vec<HelpRow>,
}

/// Command tables shown in a group's help page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandListing {
    /// Direct leaves, then one summary row per direct child group
    pub main: Vec<HelpRow>,
    /// One listing per direct child group that has leaves
    pub sections: Vec<SectionListing>,
}

/// Mirror `group` and everything below it, depth-first in declaration order
#[must_use]
#[inline]
pub fn collect_section(group: &Group) -> Section {
    let items = group
        .children()
        .iter()
        .map(|child| match child {
            CommandNode::Leaf(leaf) => Item::Command {
                name: leaf.name().to_owned(),
                help: leaf.help().to_owned(),
            },
            CommandNode::Group(nested) => Item::Section(collect_section(nested)),
        })
        .collect();

    Section {
        name: group.name().to_owned(),
        help: group.help().to_owned(),
        items,
    }
}

/// Prefix every leaf name with the path of groups above it
///
/// `prefix` is the path already accumulated above `section`'s items; `None`
/// for the group being rendered. Each nested section extends the prefix with
/// its own name before descending. Section names stay literal.
#[must_use]
#[inline]
pub fn qualify(section: Section, prefix: Option<&str>) -> Section {
    let items = section
        .items
        .into_iter()
        .map(|item| match item {
            Item::Command { name, help } => Item::Command {
                name: join_path(prefix, &name),
                help,
            },
            Item::Section(child) => {
                let child_prefix = join_path(prefix, &child.name);
                Item::Section(qualify(child, Some(&child_prefix)))
            }
        })
        .collect();

    Section {
        name: section.name,
        help: section.help,
        items,
    }
}

/// Every leaf below `section`, depth-first
#[must_use]
#[inline]
pub fn leaf_rows(section: &Section) -> Vec<HelpRow> {
    section
        .items
        .iter()
        .flat_map(|item| match item {
            Item::Command { name, help } => vec![HelpRow::new(name.as_str(), help.as_str())],
            Item::Section(child) => leaf_rows(child),
        })
        .collect()
}

/// Build the command tables for `group`'s help page
#[must_use]
#[inline]
pub fn list_commands(group: &Group) -> CommandListing {
    let root = qualify(collect_section(group), None);

    let commands = root.items.iter().filter_map(|item| match item {
        Item::Command { name, help } => Some(HelpRow::new(name.as_str(), help.as_str())),
        Item::Section(_) => None,
    });
    let summaries = root.items.iter().filter_map(|item| match item {
        Item::Section(section) => Some(HelpRow::new(
            section.name.as_str(),
            section.help.as_str(),
        )),
        Item::Command { .. } => None,
    });
    let main = commands.chain(summaries).collect();

    let sections = root
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Section(section) => {
                let commands = leaf_rows(section);
                (!commands.is_empty()).then(|| SectionListing {
                    name: section.name.clone(),
                    commands,
                })
            }
            Item::Command { .. } => None,
        })
        .collect();

    CommandListing { main, sections }
}

fn join_path(prefix: Option<&str>, name: &str) -> String {
    prefix.map_or_else(|| name.to_owned(), |path| format!("{path} {name}"))
}

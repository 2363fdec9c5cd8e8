//! Help formatter
//!
//! Renders help pages for groups and leaf commands. A group's page lists its
//! direct commands and child groups under `main commands`, then repeats every
//! leaf of each child group under `<group> commands` with its qualified name.

pub mod render;
pub mod sections;

pub use render::{HelpStyle, render_text};
pub use sections::{CommandListing, HelpRow, SectionListing, list_commands};

use crate::cli::Args;
use crate::error::CliError;
use crate::tree::{Group, Leaf};
use clap::{Arg, CommandFactory as _};
use core::str::FromStr;
use serde::Serialize;

/// Output format for help pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum HelpFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// Pretty-printed JSON of the `HelpPage`
    Json,
}

impl FromStr for HelpFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid help format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// Everything shown on one help page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpPage {
    /// Usage line without the `Usage:` prefix
    pub usage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub options: Vec<HelpRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub main_commands: Vec<HelpRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionListing>,
}

/// Usage line of a group at `path`
#[must_use]
#[inline]
pub fn group_usage(path: &str) -> String {
    format!("{path} [OPTIONS] COMMAND [ARGS]...")
}

/// Usage line of a leaf command at `path`
#[must_use]
#[inline]
pub fn leaf_usage(leaf: &Leaf, path: &str) -> String {
    let mut usage = format!("{path} [OPTIONS]");
    for argument in leaf.arguments() {
        usage.push(' ');
        usage.push_str(&argument.metavar());
    }
    usage
}

/// Help page for the group reached at `path`
#[must_use]
#[inline]
pub fn group_page(group: &Group, path: &str) -> HelpPage {
    let CommandListing { main, sections } = list_commands(group);
    HelpPage {
        usage: group_usage(path),
        description: group.help().to_owned(),
        options: help_option(),
        main_commands: main,
        sections,
    }
}

/// Help page for the root group, listing every global option
#[must_use]
#[inline]
pub fn root_page(root: &Group, path: &str) -> HelpPage {
    HelpPage {
        options: global_options(),
        ..group_page(root, path)
    }
}

/// Help page for the leaf command reached at `path`
#[must_use]
#[inline]
pub fn leaf_page(leaf: &Leaf, path: &str) -> HelpPage {
    HelpPage {
        usage: leaf_usage(leaf, path),
        description: leaf.help().to_owned(),
        options: help_option(),
        main_commands: Vec::new(),
        sections: Vec::new(),
    }
}

/// Render a help page in the requested format
///
/// # Errors
///
/// Returns an error if the page cannot be serialized to JSON
#[inline]
pub fn render(page: &HelpPage, format: HelpFormat, style: &HelpStyle) -> Result<String, CliError> {
    match format {
        HelpFormat::Text => Ok(render_text(page, style)),
        HelpFormat::Json => serde_json::to_string_pretty(page)
            .map(|json| format!("{json}\n"))
            .map_err(|e| CliError::output(format!("Failed to serialize help page: {e}"))),
    }
}

/// Text help for the group reached at `path`, with the default style
#[must_use]
#[inline]
pub fn format_group_help(group: &Group, path: &str) -> String {
    render_text(&group_page(group, path), &HelpStyle::default())
}

/// Option rows for the global flags parsed before the command path
#[must_use]
#[inline]
pub fn global_options() -> Vec<HelpRow> {
    let mut command = Args::command();
    command.build();

    command
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .map(|arg| HelpRow::new(option_name(arg), option_help(arg)))
        .collect()
}

fn option_name(arg: &Arg) -> String {
    let mut flags = Vec::new();
    if let Some(short) = arg.get_short() {
        flags.push(format!("-{short}"));
    }
    if let Some(long) = arg.get_long() {
        flags.push(format!("--{long}"));
    }

    let mut name = flags.join(", ");
    if arg.get_action().takes_values()
        && let Some(value_names) = arg.get_value_names()
    {
        for value_name in value_names {
            name.push_str(&format!(" <{value_name}>"));
        }
    }
    name
}

fn option_help(arg: &Arg) -> String {
    let mut help = arg.get_help().map(ToString::to_string).unwrap_or_default();
    if let Some(env) = arg.get_env() {
        help.push_str(&format!(" [env: {}]", env.to_string_lossy()));
    }
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy().into_owned())
        .collect();
    if !defaults.is_empty() {
        help.push_str(&format!(" [default: {}]", defaults.join(", ")));
    }
    help
}

fn help_option() -> Vec<HelpRow> {
    vec![HelpRow::new("-h, --help", "Show this message and exit.")]
}

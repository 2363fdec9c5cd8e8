//! Token resolution and argument binding

use crate::error::{CliError, UsageErrorKind};
use crate::help::{group_usage, leaf_usage};
use crate::tree::{CommandNode, Group, Invocation, Leaf};
use tracing::debug;

/// Where a token sequence leads in the command tree
#[derive(Debug)]
pub enum Resolution<'tree> {
    /// Help was requested for a group, or the tokens stopped at one
    GroupHelp { group: &'tree Group, path: String },
    /// Help was requested for a leaf command
    LeafHelp { leaf: &'tree Leaf, path: String },
    /// A leaf command with its arguments bound
    Invoke {
        leaf: &'tree Leaf,
        invocation: Invocation,
    },
}

/// Walk `tokens` down from `root`
///
/// Each token is matched against the children of the current group until a
/// leaf is reached; the remaining tokens become that leaf's arguments.
///
/// # Errors
///
/// Returns a usage error if:
/// - A token names no child of the current group
/// - An option other than `-h`/`--help` appears
/// - The leaf receives too few or too many arguments
#[inline]
pub fn resolve<'tree>(root: &'tree Group, tokens: &[String]) -> Result<Resolution<'tree>, CliError> {
    let mut group = root;
    let mut path = root.name().to_owned();
    let mut rest = tokens;

    loop {
        let Some((token, tail)) = rest.split_first() else {
            return Ok(Resolution::GroupHelp { group, path });
        };

        if is_help_flag(token) {
            return Ok(Resolution::GroupHelp { group, path });
        }

        match group.child(token) {
            Some(CommandNode::Group(nested)) => {
                path = format!("{path} {token}");
                group = nested;
                rest = tail;
            }
            Some(CommandNode::Leaf(leaf)) => {
                let leaf_path = format!("{path} {token}");
                debug!("Resolved '{leaf_path}' with {} argument tokens", tail.len());

                if split_at_escape(tail).0.iter().any(|arg| is_help_flag(arg)) {
                    return Ok(Resolution::LeafHelp {
                        leaf,
                        path: leaf_path,
                    });
                }

                let invocation = bind(leaf, &leaf_path, tail)?;
                return Ok(Resolution::Invoke { leaf, invocation });
            }
            None if is_option(token) => {
                return Err(CliError::usage(
                    UsageErrorKind::NoSuchOption {
                        option: token.clone(),
                    },
                    group_usage(&path),
                    path,
                ));
            }
            None => {
                return Err(CliError::usage(
                    UsageErrorKind::NoSuchCommand {
                        token: token.clone(),
                        available: group.child_names(),
                    },
                    group_usage(&path),
                    path,
                ));
            }
        }
    }
}

/// Bind `tokens` to the positional arguments of `leaf`
///
/// The first `--` ends option processing; it is dropped and every token
/// after it binds as a positional value, even one starting with `-`.
///
/// # Errors
///
/// Returns a usage error if a token before `--` looks like an option or the
/// token count differs from the number of declared arguments
#[inline]
pub fn bind(leaf: &Leaf, path: &str, tokens: &[String]) -> Result<Invocation, CliError> {
    let usage_error = |kind: UsageErrorKind| CliError::usage(kind, leaf_usage(leaf, path), path);

    let (options_part, escaped) = split_at_escape(tokens);
    if let Some(option) = options_part.iter().find(|token| is_option(token)) {
        return Err(usage_error(UsageErrorKind::NoSuchOption {
            option: option.clone(),
        }));
    }
    let values: Vec<&String> = options_part.iter().chain(escaped).collect();

    let declared = leaf.arguments();
    if let Some(missing) = declared.get(values.len()) {
        return Err(usage_error(UsageErrorKind::MissingArgument {
            name: missing.metavar(),
        }));
    }
    if values.len() > declared.len() {
        return Err(usage_error(UsageErrorKind::ExtraArguments {
            tokens: values
                .iter()
                .skip(declared.len())
                .map(|value| (*value).clone())
                .collect(),
        }));
    }

    let arguments = declared
        .iter()
        .zip(values)
        .map(|(argument, value)| (argument.name().to_owned(), value.clone()))
        .collect();

    Ok(Invocation::new(path.to_owned(), arguments))
}

/// Tokens before the first `--` and tokens after it
fn split_at_escape(tokens: &[String]) -> (&[String], &[String]) {
    match tokens.iter().position(|token| token == "--") {
        Some(index) => (
            tokens.get(..index).unwrap_or_default(),
            tokens.get(index + 1..).unwrap_or_default(),
        ),
        None => (tokens, &[]),
    }
}

fn is_help_flag(token: &str) -> bool {
    matches!(token, "-h" | "--help")
}

fn is_option(token: &str) -> bool {
    token.starts_with('-') && token != "-"
}

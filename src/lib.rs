//! `nestcli` - a command-line interface built from nested command groups
//!
//! The command tree is assembled once by the registry, routed by the
//! dispatcher and described by the help formatter, which flattens nested
//! groups into one section per child group.

pub mod cli;
pub mod commands;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod registry;
pub mod tree;

use anyhow::Result;
use cli::Args;
use console::Console;
use dispatch::{Dispatcher, Outcome, report_error};
use error::{CliError, UsageErrorKind};
use help::{HelpFormat, group_usage};
use registry::{ROOT_NAME, Registry};

/// Main entry point for the nestcli library
///
/// Failures are reported to `console` before they are returned.
///
/// # Errors
///
/// Returns a `CliError` if registration, option parsing, resolution or the
/// handler fails
#[inline]
pub fn run(args: &Args, console: &dyn Console) -> Result<Outcome> {
    let registry = Registry::build().inspect_err(|err| report_error(err, console))?;

    let format = args
        .help_format
        .parse::<HelpFormat>()
        .map_err(|message| {
            CliError::usage(
                UsageErrorKind::InvalidValue {
                    option: "--help-format".to_owned(),
                    message,
                },
                group_usage(ROOT_NAME),
                ROOT_NAME,
            )
        })
        .inspect_err(|err| report_error(err, console))?;

    let dispatcher = Dispatcher::new(registry.root()).with_format(format);
    let outcome = dispatcher.run(&args.command_tokens(), console)?;

    Ok(outcome)
}

//! Command dispatch
//!
//! Resolves argument tokens against the command tree, binds positional
//! arguments, runs the selected handler and reports failures. Everything
//! the dispatcher prints is help, usage or error text; command output comes
//! from handlers.

pub mod resolve;

pub use resolve::{Resolution, bind, resolve};

use crate::console::Console;
use crate::error::CliError;
use crate::help::{self, HelpFormat, HelpPage, HelpStyle};
use crate::tree::Group;
use tracing::{debug, warn};

/// What a successful dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    /// A help page was printed; no handler ran
    HelpShown,
    /// The handler of the named command ran to completion
    Dispatched { command: String },
}

/// Routes one invocation through a borrowed command tree
#[derive(Debug, Clone)]
pub struct Dispatcher<'tree> {
    root: &'tree Group,
    format: HelpFormat,
    style: HelpStyle,
}

impl<'tree> Dispatcher<'tree> {
    /// Create a dispatcher rendering text help with the default style
    #[must_use]
    #[inline]
    pub fn new(root: &'tree Group) -> Self {
        Self {
            root,
            format: HelpFormat::default(),
            style: HelpStyle::default(),
        }
    }

    /// Select the help output format (builder pattern)
    #[must_use]
    #[inline]
    pub const fn with_format(mut self, format: HelpFormat) -> Self {
        self.format = format;
        self
    }

    /// Select the text help layout (builder pattern)
    #[must_use]
    #[inline]
    pub const fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolve `tokens` and act on them
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tokens do not name a command or carry the wrong number of arguments
    /// - The selected handler fails
    /// - Help output cannot be written
    #[inline]
    pub fn dispatch(&self, tokens: &[String], console: &dyn Console) -> Result<Outcome, CliError> {
        match resolve(self.root, tokens)? {
            Resolution::GroupHelp { group, path } => {
                debug!("Showing help for group '{path}'");
                let page = if core::ptr::eq(group, self.root) {
                    help::root_page(group, &path)
                } else {
                    help::group_page(group, &path)
                };
                self.show(&page, console)?;
                Ok(Outcome::HelpShown)
            }
            Resolution::LeafHelp { leaf, path } => {
                debug!("Showing help for command '{path}'");
                self.show(&help::leaf_page(leaf, &path), console)?;
                Ok(Outcome::HelpShown)
            }
            Resolution::Invoke { leaf, invocation } => {
                debug!(
                    "Invoking '{}' with {:?}",
                    invocation.command(),
                    invocation.values()
                );
                (leaf.handler())(&invocation, console)
                    .map_err(|err| CliError::handler(invocation.command(), format!("{err:#}")))?;
                Ok(Outcome::Dispatched {
                    command: invocation.command().to_owned(),
                })
            }
        }
    }

    /// Dispatch and report any failure to the console
    ///
    /// # Errors
    ///
    /// Returns the dispatch error after it has been reported
    #[inline]
    pub fn run(&self, tokens: &[String], console: &dyn Console) -> Result<Outcome, CliError> {
        let result = self.dispatch(tokens, console);
        if let Err(err) = result.as_ref() {
            report_error(err, console);
        }
        result
    }

    fn show(&self, page: &HelpPage, console: &dyn Console) -> Result<(), CliError> {
        let text = help::render(page, self.format, &self.style)?;
        console.write_out(&text)?;
        Ok(())
    }
}

/// Print a user-facing report of `err`
///
/// Usage errors get the usage line and a `--help` hint before the message.
#[inline]
pub fn report_error(err: &CliError, console: &dyn Console) {
    let written = match err {
        CliError::Usage {
            kind,
            usage,
            command_path,
        } => console.write_err(&format!(
            "Usage: {usage}\nTry '{command_path} --help' for help.\n\nError: {kind}\n"
        )),
        other => console.echo_err(&format!("Error: {other}")),
    };

    if let Err(io_err) = written {
        warn!("Failed to report error ({err}): {io_err}");
    }
}

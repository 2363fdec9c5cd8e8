//! Custom error types with exit codes

use core::fmt;
use thiserror::Error;

/// Main error type for CLI registration and dispatch
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CliError {
    /// Registration Error - the command tree is malformed
    #[error("Registration error: {message}")]
    Registration { message: String },

    /// Usage Error - the invocation does not match the command tree
    #[error("{kind}")]
    Usage {
        kind: UsageErrorKind,
        /// Usage line of the command the error was raised for
        usage: String,
        /// Qualified path of that command, used for the `--help` hint
        command_path: String,
    },

    /// Handler Error - a command's business logic failed
    #[error("Command '{command}' failed: {message}")]
    Handler { command: String, message: String },

    /// Output Error - writing to the console or serializing help failed
    #[error("Output error: {message}")]
    Output { message: String },
}

/// What went wrong with an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsageErrorKind {
    /// A token names no child of the current group
    NoSuchCommand { token: String, available: Vec<String> },
    /// An option other than `--help` was given
    NoSuchOption { option: String },
    /// Fewer tokens than required arguments
    MissingArgument { name: String },
    /// More tokens than required arguments
    ExtraArguments { tokens: Vec<String> },
    /// A global option received a value it does not accept
    InvalidValue { option: String, message: String },
}

impl fmt::Display for UsageErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchCommand { token, available } => {
                write!(f, "No such command '{token}'.")?;
                if !available.is_empty() {
                    write!(f, " Available commands: {}.", available.join(", "))?;
                }
                Ok(())
            }
            Self::NoSuchOption { option } => write!(f, "No such option: {option}"),
            Self::MissingArgument { name } => write!(f, "Missing argument '{name}'."),
            Self::ExtraArguments { tokens } if tokens.len() == 1 => {
                write!(f, "Got unexpected extra argument ({})", tokens.join(" "))
            }
            Self::ExtraArguments { tokens } => {
                write!(f, "Got unexpected extra arguments ({})", tokens.join(" "))
            }
            Self::InvalidValue { option, message } => {
                write!(f, "Invalid value for '{option}': {message}")
            }
        }
    }
}

impl CliError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Handler { .. } | Self::Output { .. } => 1,
            Self::Usage { .. } => 2,
            Self::Registration { .. } => 3,
        }
    }

    /// Create a registration error
    #[inline]
    pub fn registration<S: Into<String>>(message: S) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create a usage error for the command at `command_path`
    #[inline]
    pub fn usage<U: Into<String>, P: Into<String>>(
        kind: UsageErrorKind,
        usage: U,
        command_path: P,
    ) -> Self {
        Self::Usage {
            kind,
            usage: usage.into(),
            command_path: command_path.into(),
        }
    }

    /// Create a handler error
    #[inline]
    pub fn handler<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::Handler {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// The usage error kind, if this is a usage error
    #[must_use]
    #[inline]
    pub const fn usage_kind(&self) -> Option<&UsageErrorKind> {
        match *self {
            Self::Usage { ref kind, .. } => Some(kind),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::output(err.to_string())
    }
}

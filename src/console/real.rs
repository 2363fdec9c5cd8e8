//! Real console implementation using the process standard streams

use super::Console;
use std::io::{self, Write as _};

/// Production implementation of the Console trait
///
/// Each call locks the stream for its duration so a line is never split.
#[derive(Debug, Clone, Copy)]
pub struct RealConsole;

impl RealConsole {
    /// Create a new `RealConsole` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for RealConsole {
    fn echo(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn echo_err(&self, line: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{line}")
    }

    fn write_out(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn write_err(&self, text: &str) -> io::Result<()> {
        io::stderr().lock().write_all(text.as_bytes())
    }
}

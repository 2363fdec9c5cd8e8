//! Console abstraction for command and help output
//!
//! Handlers and the dispatcher never print directly; they receive a
//! `Console` so tests can capture everything that would reach the terminal.

use std::io;

pub mod mock;
pub mod real;

pub use mock::MockConsole;
pub use real::RealConsole;

/// Output sink for a single CLI invocation
///
/// # Implementations
/// - `RealConsole`: writes to the process stdout and stderr
/// - `MockConsole`: captures both streams in memory
pub trait Console {
    /// Write one line to standard output
    fn echo(&self, line: &str) -> io::Result<()>;

    /// Write one line to standard error
    fn echo_err(&self, line: &str) -> io::Result<()>;

    /// Write a pre-formatted block to standard output, unchanged
    ///
    /// Help pages already end with a newline, so they go out verbatim.
    fn write_out(&self, text: &str) -> io::Result<()>;

    /// Write a pre-formatted block to standard error, unchanged
    fn write_err(&self, text: &str) -> io::Result<()>;
}

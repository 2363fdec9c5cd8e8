//! Mock console implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::Console;
use std::io;
use std::sync::{Arc, RwLock};

/// In-memory implementation of the Console trait for testing
///
/// Clones share the same buffers, so a test can hand one clone to the
/// dispatcher and inspect the output through another.
///
/// # Example
/// ```
/// use nestcli::console::{Console, MockConsole};
///
/// let console = MockConsole::new();
/// console.echo("Building app: demo").unwrap();
///
/// assert_eq!(console.stdout(), "Building app: demo\n");
/// assert!(console.stderr().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockConsole {
    state: Arc<RwLock<MockConsoleState>>,
}

#[derive(Default)]
struct MockConsoleState {
    stdout: String,
    stderr: String,
    fail_writes: bool,
}

impl MockConsole {
    /// Create a new `MockConsole` with empty buffers
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (builder pattern)
    ///
    /// Simulates a closed pipe on the other end of the terminal.
    #[must_use]
    #[inline]
    pub fn failing(self) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.fail_writes = true;
        }
        self
    }

    /// Everything written to standard output so far
    #[must_use]
    #[inline]
    pub fn stdout(&self) -> String {
        self.state
            .read()
            .map(|state| state.stdout.clone())
            .unwrap_or_default()
    }

    /// Everything written to standard error so far
    #[must_use]
    #[inline]
    pub fn stderr(&self) -> String {
        self.state
            .read()
            .map(|state| state.stderr.clone())
            .unwrap_or_default()
    }

    #[inline]
    fn append(&self, to_stderr: bool, text: &str) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        if to_stderr {
            state.stderr.push_str(text);
        } else {
            state.stdout.push_str(text);
        }
        drop(state);
        Ok(())
    }
}

impl Console for MockConsole {
    #[inline]
    fn echo(&self, line: &str) -> io::Result<()> {
        self.append(false, &format!("{line}\n"))
    }

    #[inline]
    fn echo_err(&self, line: &str) -> io::Result<()> {
        self.append(true, &format!("{line}\n"))
    }

    #[inline]
    fn write_out(&self, text: &str) -> io::Result<()> {
        self.append(false, text)
    }

    #[inline]
    fn write_err(&self, text: &str) -> io::Result<()> {
        self.append(true, text)
    }
}

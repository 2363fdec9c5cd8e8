//! Arguments bound to a leaf command

use anyhow::{Result, anyhow};

/// A resolved leaf call: its qualified path and bound positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: String,
    arguments: Vec<(String, String)>,
}

impl Invocation {
    /// Create an invocation from already-bound `(name, value)` pairs
    #[must_use]
    #[inline]
    pub const fn new(command: String, arguments: Vec<(String, String)>) -> Self {
        Self { command, arguments }
    }

    /// Qualified command path, e.g. `cli app build`
    #[must_use]
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Value bound to the argument `name`
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value bound to the argument `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the command declares no such argument
    #[inline]
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| anyhow!("argument '{name}' is not bound for '{}'", self.command))
    }

    /// Bound values in declaration order
    #[must_use]
    #[inline]
    pub fn values(&self) -> Vec<&str> {
        self.arguments
            .iter()
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

//! Command tree model
//!
//! A command tree is a `Group` root whose children are either leaf
//! commands or further groups. Trees are built once with the builder
//! methods below and only borrowed afterwards.

pub mod invocation;

pub use invocation::Invocation;

use crate::console::Console;
use core::fmt;

/// Callback run when a leaf command is invoked
///
/// Errors are reported to the user as handler failures.
pub type Handler = fn(&Invocation, &dyn Console) -> anyhow::Result<()>;

/// Required positional argument of a leaf command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    name: String,
}

impl ArgumentDescriptor {
    /// Create a new argument descriptor
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Argument name as handlers look it up
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder shown in usage lines (`name` -> `NAME`)
    #[must_use]
    #[inline]
    pub fn metavar(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Directly invocable command
#[derive(Clone)]
pub struct Leaf {
    name: String,
    help: String,
    handler: Handler,
    arguments: Vec<ArgumentDescriptor>,
}

impl Leaf {
    /// Create a leaf command without arguments
    #[must_use]
    #[inline]
    pub fn new<N: Into<String>, H: Into<String>>(name: N, help: H, handler: Handler) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            handler,
            arguments: Vec::new(),
        }
    }

    /// Append a required positional argument (builder pattern)
    #[must_use]
    #[inline]
    pub fn argument<S: Into<String>>(mut self, name: S) -> Self {
        self.arguments.push(ArgumentDescriptor::new(name));
        self
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[must_use]
    #[inline]
    pub const fn handler(&self) -> Handler {
        self.handler
    }

    /// Positional arguments in declaration order
    #[must_use]
    #[inline]
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Named collection of commands and nested groups
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    help: String,
    children: Vec<CommandNode>,
}

impl Group {
    /// Create an empty group
    #[must_use]
    #[inline]
    pub fn new<N: Into<String>, H: Into<String>>(name: N, help: H) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            children: Vec::new(),
        }
    }

    /// Append a leaf command (builder pattern)
    #[must_use]
    #[inline]
    pub fn command(mut self, leaf: Leaf) -> Self {
        self.children.push(CommandNode::Leaf(leaf));
        self
    }

    /// Append a nested group (builder pattern)
    #[must_use]
    #[inline]
    pub fn group(mut self, group: Self) -> Self {
        self.children.push(CommandNode::Group(group));
        self
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Children in declaration order
    #[must_use]
    #[inline]
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Find a direct child by name
    #[must_use]
    #[inline]
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Names of the direct children in declaration order
    #[must_use]
    #[inline]
    pub fn child_names(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|child| child.name().to_owned())
            .collect()
    }
}

/// Either a leaf command or a group
#[derive(Debug, Clone)]
pub enum CommandNode {
    Leaf(Leaf),
    Group(Group),
}

impl CommandNode {
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.name(),
            Self::Group(group) => group.name(),
        }
    }

    #[must_use]
    #[inline]
    pub fn help(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.help(),
            Self::Group(group) => group.help(),
        }
    }
}

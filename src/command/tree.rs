//! Static command trees.
//!
//! A [`CommandTree`] is an ordered, compile-time slice of
//! [`CommandDefinition`]s. Each definition pairs a name with exactly one
//! [`CommandKind`], which alone decides how the resolver treats it. Trees nest
//! through [`CommandKind::Subcommand`].
//!
//! # Example
//!
//! ```rust
//! use izumi::app::ApplicationContext;
//! use izumi::command::{CommandDefinition, CommandKind, CommandTree};
//! use izumi::Result;
//!
//! fn hello(_: &mut ApplicationContext) -> Result<()> {
//!     Ok(())
//! }
//!
//! static TREE: CommandTree = CommandTree::new(&[
//!     CommandDefinition::no_args("hello", hello),
//!     CommandDefinition::alias("hi", "hello"),
//! ]);
//!
//! assert!(matches!(TREE.lookup("hi").map(|d| &d.kind), Some(CommandKind::Alias("hello"))));
//! assert!(TREE.lookup("bye").is_none());
//! ```

use crate::app::ApplicationContext;
use crate::domain::error::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;

/// Handler for a command that takes no arguments.
pub type NoArgsHandler = fn(&mut ApplicationContext) -> Result<()>;

/// Handler for a command that takes arguments.
pub type ArgsHandler = fn(&mut ApplicationContext, &[String]) -> Result<()>;

/// How a command definition is dispatched.
#[derive(Clone, Copy)]
pub enum CommandKind {
    /// Accepts no arguments.
    NoArgs(NoArgsHandler),
    /// Accepts exactly `n` arguments.
    FixedArity(usize, ArgsHandler),
    /// Accepts any number of arguments; the handler validates them.
    VariableArity(ArgsHandler),
    /// The next token is resolved against a nested tree.
    Subcommand(&'static CommandTree),
    /// Stands for another name in the same tree.
    Alias(&'static str),
}

impl fmt::Debug for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArgs(_) => f.write_str("NoArgs"),
            Self::FixedArity(n, _) => write!(f, "FixedArity({n})"),
            Self::VariableArity(_) => f.write_str("VariableArity"),
            Self::Subcommand(tree) => f.debug_tuple("Subcommand").field(&tree.names().collect::<Vec<_>>()).finish(),
            Self::Alias(target) => f.debug_tuple("Alias").field(target).finish(),
        }
    }
}

/// A named entry in a [`CommandTree`].
#[derive(Debug, Clone, Copy)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub kind: CommandKind,
}

impl CommandDefinition {
    #[must_use]
    pub const fn no_args(name: &'static str, handler: NoArgsHandler) -> Self {
        Self {
            name,
            kind: CommandKind::NoArgs(handler),
        }
    }

    #[must_use]
    pub const fn fixed(name: &'static str, arity: usize, handler: ArgsHandler) -> Self {
        Self {
            name,
            kind: CommandKind::FixedArity(arity, handler),
        }
    }

    #[must_use]
    pub const fn variable(name: &'static str, handler: ArgsHandler) -> Self {
        Self {
            name,
            kind: CommandKind::VariableArity(handler),
        }
    }

    #[must_use]
    pub const fn subcommand(name: &'static str, tree: &'static CommandTree) -> Self {
        Self {
            name,
            kind: CommandKind::Subcommand(tree),
        }
    }

    #[must_use]
    pub const fn alias(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            kind: CommandKind::Alias(target),
        }
    }
}

/// An immutable, ordered set of command definitions.
///
/// Names are unique within one tree; [`lookup`](Self::lookup) returns the
/// first match.
#[derive(Debug)]
pub struct CommandTree {
    commands: &'static [CommandDefinition],
}

impl CommandTree {
    #[must_use]
    pub const fn new(commands: &'static [CommandDefinition]) -> Self {
        Self { commands }
    }

    /// Finds the definition named `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static CommandDefinition> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Iterates over the names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.commands.iter().map(|command| command.name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the name in this tree that best fuzzy-matches `input`.
    ///
    /// Used to suggest a correction after an unknown command. Aliases are
    /// skipped so suggestions always name the real command. Ties keep the
    /// earlier definition.
    #[must_use]
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        if input.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        let mut best: Option<(i64, &'static str)> = None;

        for command in self.commands {
            if matches!(command.kind, CommandKind::Alias(_)) {
                continue;
            }
            let Some(score) = matcher.fuzzy_match(command.name, input) else {
                continue;
            };
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, command.name));
            }
        }

        best.map(|(_, name)| name)
    }
}

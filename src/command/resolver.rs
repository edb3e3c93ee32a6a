//! Recursive-descent command resolution and dispatch.
//!
//! Resolution walks a [`CommandTree`] against a token sequence:
//!
//! 1. The first token names a definition in the current tree.
//! 2. An alias is looked up again in the same tree with the same arguments.
//!    Revisiting a name fails with `AliasCycle`.
//! 3. A subcommand descends into its child tree with the remaining tokens.
//! 4. Anything else checks arity and yields an [`Invocation`].
//!
//! [`resolve`] has no side effects; [`dispatch`] resolves and then calls the
//! handler. [`run_command`] collapses the outcome to the boolean contract
//! expected by front ends.

use super::tree::{ArgsHandler, CommandKind, CommandTree, NoArgsHandler};
use crate::app::ApplicationContext;
use crate::domain::error::{IzumiError, Result};
use std::collections::HashSet;

/// A handler bound to its arguments, ready to run.
#[derive(Clone, Copy)]
pub enum Invocation<'a> {
    NoArgs(NoArgsHandler),
    WithArgs(ArgsHandler, &'a [String]),
}

impl<'a> Invocation<'a> {
    /// Runs the handler against `context`.
    ///
    /// # Errors
    ///
    /// Returns whatever the handler returns.
    pub fn invoke(self, context: &mut ApplicationContext) -> Result<()> {
        match self {
            Self::NoArgs(handler) => handler(context),
            Self::WithArgs(handler, args) => handler(context, args),
        }
    }

    /// Arguments passed to the handler.
    #[must_use]
    pub const fn args(&self) -> &'a [String] {
        match *self {
            Self::NoArgs(_) => &[],
            Self::WithArgs(_, args) => args,
        }
    }
}

/// Result of a successful resolution.
#[derive(Clone)]
pub struct Resolution<'a> {
    /// Canonical names visited, outermost first, after alias expansion.
    ///
    /// `["panelcmd", "j"]` for `panelcmd j`, `["quit"]` for `q`.
    pub path: Vec<&'static str>,
    pub invocation: Invocation<'a>,
}

/// Resolves `tokens` against `tree` without running anything.
///
/// # Errors
///
/// - [`IzumiError::EmptyCommand`] if `tokens` is empty
/// - [`IzumiError::UnknownCommand`] if a name or alias target is not defined
/// - [`IzumiError::AliasCycle`] if alias expansion revisits a name
/// - [`IzumiError::MissingSubcommand`] if a subcommand group has no following token
/// - [`IzumiError::ArityMismatch`] if a fixed or no-argument command gets the
///   wrong number of arguments
///
/// # Example
///
/// ```rust
/// use izumi::command::{resolve, COMMANDS};
///
/// let tokens: Vec<String> = ["o", "a.lst"].iter().map(|s| s.to_string()).collect();
/// let resolution = resolve(&COMMANDS, &tokens)?;
/// assert_eq!(resolution.path, ["open"]);
/// assert_eq!(resolution.invocation.args(), ["a.lst"]);
/// # Ok::<(), izumi::IzumiError>(())
/// ```
pub fn resolve<'a>(tree: &CommandTree, tokens: &'a [String]) -> Result<Resolution<'a>> {
    let mut path = Vec::new();
    let invocation = resolve_in(tree, tokens, &mut path)?;
    Ok(Resolution { path, invocation })
}

/// A definition with its aliases fully expanded.
enum Target {
    Group(&'static CommandTree),
    NoArgs(NoArgsHandler),
    Fixed(usize, ArgsHandler),
    Variable(ArgsHandler),
}

fn resolve_in<'a>(
    tree: &CommandTree,
    tokens: &'a [String],
    path: &mut Vec<&'static str>,
) -> Result<Invocation<'a>> {
    let Some((head, rest)) = tokens.split_first() else {
        return Err(IzumiError::EmptyCommand);
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut name = head.as_str();

    let (canonical, target) = loop {
        let definition = tree
            .lookup(name)
            .ok_or_else(|| IzumiError::UnknownCommand(name.to_string()))?;

        if !visited.insert(definition.name) {
            return Err(IzumiError::AliasCycle(definition.name.to_string()));
        }

        let target = match definition.kind {
            CommandKind::Alias(next) => {
                tracing::trace!(alias = definition.name, target = next, "following alias");
                name = next;
                continue;
            }
            CommandKind::Subcommand(child) => Target::Group(child),
            CommandKind::NoArgs(handler) => Target::NoArgs(handler),
            CommandKind::FixedArity(arity, handler) => Target::Fixed(arity, handler),
            CommandKind::VariableArity(handler) => Target::Variable(handler),
        };
        break (definition.name, target);
    };

    path.push(canonical);

    match target {
        Target::Group(child) => {
            if rest.is_empty() {
                return Err(IzumiError::MissingSubcommand(canonical.to_string()));
            }
            resolve_in(child, rest, path)
        }
        Target::NoArgs(handler) => {
            if rest.is_empty() {
                Ok(Invocation::NoArgs(handler))
            } else {
                Err(IzumiError::ArityMismatch {
                    expected: 0,
                    actual: rest.len(),
                })
            }
        }
        Target::Fixed(arity, handler) => {
            if rest.len() == arity {
                Ok(Invocation::WithArgs(handler, rest))
            } else {
                Err(IzumiError::ArityMismatch {
                    expected: arity,
                    actual: rest.len(),
                })
            }
        }
        Target::Variable(handler) => Ok(Invocation::WithArgs(handler, rest)),
    }
}

/// Resolves `tokens` against `tree` and runs the matching handler.
///
/// # Errors
///
/// Returns a resolution error from [`resolve`] or the handler's own error.
/// Either way the error is also traced at debug level before being returned.
pub fn dispatch(tree: &CommandTree, context: &mut ApplicationContext, tokens: &[String]) -> Result<()> {
    let _span = tracing::debug_span!("dispatch", command = ?tokens).entered();

    let outcome = resolve(tree, tokens).and_then(|resolution| {
        tracing::debug!(
            path = ?resolution.path,
            args = resolution.invocation.args().len(),
            "command resolved"
        );
        resolution.invocation.invoke(context)
    });

    if let Err(error) = &outcome {
        tracing::debug!(error = %error, "command failed");
    }
    outcome
}

/// Dispatches `tokens` and reports only whether the command succeeded.
pub fn run_command(tree: &CommandTree, context: &mut ApplicationContext, tokens: &[String]) -> bool {
    dispatch(tree, context, tokens).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tree::CommandDefinition;
    use crate::Config;

    fn bump(context: &mut ApplicationContext) -> Result<()> {
        context.config.bar_offset += 1;
        Ok(())
    }

    fn count_args(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
        context.config.stage_width = i32::try_from(args.len()).unwrap_or(i32::MAX);
        Ok(())
    }

    static INNER: CommandTree = CommandTree::new(&[
        CommandDefinition::no_args("bump", bump),
        CommandDefinition::alias("b", "bump"),
    ]);

    static TREE: CommandTree = CommandTree::new(&[
        CommandDefinition::no_args("bump", bump),
        CommandDefinition::alias("b", "bump"),
        CommandDefinition::alias("bb", "b"),
        CommandDefinition::fixed("two", 2, count_args),
        CommandDefinition::variable("many", count_args),
        CommandDefinition::subcommand("group", &INNER),
        CommandDefinition::alias("g", "group"),
        CommandDefinition::alias("loop1", "loop2"),
        CommandDefinition::alias("loop2", "loop3"),
        CommandDefinition::alias("loop3", "loop1"),
        CommandDefinition::alias("self", "self"),
        CommandDefinition::alias("dangling", "missing"),
        CommandDefinition::alias("t", "two"),
        CommandDefinition::alias("m", "many"),
    ]);

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn context() -> ApplicationContext {
        ApplicationContext::with_defaults(Config::default())
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(resolve(&TREE, &[]), Err(IzumiError::EmptyCommand)));
    }

    #[test]
    fn unknown_head_is_reported() {
        let err = resolve(&TREE, &tokens("nope 1")).err().unwrap();
        assert!(matches!(err, IzumiError::UnknownCommand(name) if name == "nope"));
    }

    #[test]
    fn alias_chains_resolve_to_canonical_name() {
        let input = tokens("bb");
        let resolution = resolve(&TREE, &input).unwrap();
        assert_eq!(resolution.path, ["bump"]);
    }

    #[test]
    fn alias_cycles_terminate() {
        assert!(matches!(resolve(&TREE, &tokens("loop1")), Err(IzumiError::AliasCycle(_))));
        assert!(matches!(resolve(&TREE, &tokens("loop3 x")), Err(IzumiError::AliasCycle(_))));
        assert!(matches!(resolve(&TREE, &tokens("self")), Err(IzumiError::AliasCycle(n)) if n == "self"));
    }

    #[test]
    fn dangling_alias_reports_target() {
        let err = resolve(&TREE, &tokens("dangling")).err().unwrap();
        assert!(matches!(err, IzumiError::UnknownCommand(name) if name == "missing"));
    }

    #[test]
    fn subcommands_recurse_and_aliases_work_inside() {
        let input = tokens("g b");
        let resolution = resolve(&TREE, &input).unwrap();
        assert_eq!(resolution.path, ["group", "bump"]);

        assert!(matches!(resolve(&TREE, &tokens("group")), Err(IzumiError::MissingSubcommand(n)) if n == "group"));
        assert!(matches!(resolve(&TREE, &tokens("group two")), Err(IzumiError::UnknownCommand(n)) if n == "two"));
    }

    #[test]
    fn aliases_expand_to_every_definition_kind() {
        let input = tokens("t x y");
        let resolution = resolve(&TREE, &input).unwrap();
        assert_eq!(resolution.path, ["two"]);
        assert_eq!(resolution.invocation.args(), ["x", "y"]);

        let input = tokens("m 1 2 3");
        let resolution = resolve(&TREE, &input).unwrap();
        assert_eq!(resolution.path, ["many"]);
        assert_eq!(resolution.invocation.args().len(), 3);

        assert!(matches!(
            resolve(&TREE, &tokens("t x")),
            Err(IzumiError::ArityMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(resolve(&TREE, &tokens("g")), Err(IzumiError::MissingSubcommand(n)) if n == "group"));
    }

    #[test]
    fn arity_is_checked() {
        assert!(matches!(
            resolve(&TREE, &tokens("bump x")),
            Err(IzumiError::ArityMismatch { expected: 0, actual: 1 })
        ));
        assert!(matches!(
            resolve(&TREE, &tokens("two a")),
            Err(IzumiError::ArityMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            resolve(&TREE, &tokens("group bump extra")),
            Err(IzumiError::ArityMismatch { expected: 0, actual: 1 })
        ));
        assert_eq!(resolve(&TREE, &tokens("two a b")).unwrap().invocation.args(), ["a", "b"]);
    }

    #[test]
    fn variable_arity_accepts_anything() {
        let mut context = context();
        dispatch(&TREE, &mut context, &tokens("many")).unwrap();
        assert_eq!(context.config.stage_width, 0);
        dispatch(&TREE, &mut context, &tokens("many 1 2 3")).unwrap();
        assert_eq!(context.config.stage_width, 3);
    }

    #[test]
    fn dispatch_runs_handler_once_and_failures_run_nothing() {
        let mut context = context();
        let before = context.config.bar_offset;

        assert!(run_command(&TREE, &mut context, &tokens("b")));
        assert_eq!(context.config.bar_offset, before + 1);

        assert!(!run_command(&TREE, &mut context, &tokens("b extra")));
        assert!(!run_command(&TREE, &mut context, &tokens("loop1")));
        assert_eq!(context.config.bar_offset, before + 1);
    }
}

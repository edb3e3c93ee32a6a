//! The built-in command vocabulary.
//!
//! | Command | Aliases | Arity | Effect |
//! |---|---|---|---|
//! | `newpanel` | `n` | 0 | create window |
//! | `closepanel` | `c` | 0 or 1 | close focused or given window |
//! | `closeallpanels` | `ca` | 0 | close all windows |
//! | `open` | `o` | 1 | load file into focused window |
//! | `panelcmd j` | | 0 | focus next window |
//! | `panelcmd k` | | 0 | focus previous window |
//! | `set` | | 2 | set `barOffset` or `stageWidth` |
//! | `panelsync` | | 0 | enable window sync |
//! | `paneldesync` | | 0 | disable window sync |
//! | `findpc` | | 1 | search by program counter |
//! | `findinst` | | 1 | search by instruction text |
//! | `next` | | 0 | repeat last search downward |
//! | `prev` | | 0 | repeat last search upward |
//! | `quit` | `q` | 0 | request termination |

use super::tree::{CommandDefinition, CommandTree};
use crate::app::handlers;

/// Window focus commands, reached through `panelcmd`.
pub static PANEL_COMMANDS: CommandTree = CommandTree::new(&[
    CommandDefinition::no_args("j", handlers::panel_focus_next),
    CommandDefinition::no_args("k", handlers::panel_focus_prev),
]);

/// Root of the command vocabulary.
pub static COMMANDS: CommandTree = CommandTree::new(&[
    CommandDefinition::alias("n", "newpanel"),
    CommandDefinition::no_args("newpanel", handlers::new_panel),
    CommandDefinition::alias("c", "closepanel"),
    CommandDefinition::variable("closepanel", handlers::close_panel),
    CommandDefinition::alias("ca", "closeallpanels"),
    CommandDefinition::no_args("closeallpanels", handlers::close_all_panels),
    CommandDefinition::alias("o", "open"),
    CommandDefinition::fixed("open", 1, handlers::open),
    CommandDefinition::subcommand("panelcmd", &PANEL_COMMANDS),
    CommandDefinition::fixed("set", 2, handlers::set),
    CommandDefinition::no_args("panelsync", handlers::panel_sync),
    CommandDefinition::no_args("paneldesync", handlers::panel_desync),
    CommandDefinition::fixed("findpc", 1, handlers::find_pc),
    CommandDefinition::fixed("findinst", 1, handlers::find_inst),
    CommandDefinition::no_args("next", handlers::next),
    CommandDefinition::no_args("prev", handlers::prev),
    CommandDefinition::alias("q", "quit"),
    CommandDefinition::no_args("quit", handlers::quit),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tree::CommandKind;
    use std::collections::HashSet;

    fn check_tree(tree: &CommandTree) {
        let names: HashSet<_> = tree.names().collect();
        assert_eq!(names.len(), tree.len(), "duplicate names");

        for name in tree.names() {
            match tree.lookup(name).map(|d| d.kind) {
                Some(CommandKind::Alias(target)) => {
                    let resolved = tree.lookup(target).map(|d| d.kind);
                    assert!(
                        matches!(resolved, Some(kind) if !matches!(kind, CommandKind::Alias(_))),
                        "alias {name} must point at a real command"
                    );
                }
                Some(CommandKind::Subcommand(child)) => check_tree(child),
                _ => {}
            }
        }
    }

    #[test]
    fn vocabulary_is_well_formed() {
        check_tree(&COMMANDS);
    }

    #[test]
    fn arities_match_the_command_table() {
        let arity = |name: &str| match COMMANDS.lookup(name).map(|d| d.kind) {
            Some(CommandKind::NoArgs(_)) => Some(0),
            Some(CommandKind::FixedArity(n, _)) => Some(n),
            _ => None,
        };

        assert_eq!(arity("open"), Some(1));
        assert_eq!(arity("set"), Some(2));
        assert_eq!(arity("findpc"), Some(1));
        assert_eq!(arity("findinst"), Some(1));
        assert_eq!(arity("next"), Some(0));
        assert_eq!(arity("quit"), Some(0));
        assert!(matches!(COMMANDS.lookup("closepanel").map(|d| d.kind), Some(CommandKind::VariableArity(_))));
    }
}

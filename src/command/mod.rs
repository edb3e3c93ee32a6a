//! Command layer: static command trees and the resolver that walks them.
//!
//! ```text
//! tokens ──► resolve(tree) ──► Resolution { path, invocation } ──► handler(context, args)
//!              │   ▲
//!              │   └── alias: same tree, same args
//!              └────── subcommand: child tree, remaining args
//! ```
//!
//! # Modules
//!
//! - [`tree`]: Command definitions and trees
//! - [`resolver`]: Resolution, dispatch and the boolean `run_command` entry point
//! - [`vocabulary`]: The built-in [`COMMANDS`] tree
//!
//! # Example
//!
//! ```rust
//! use izumi::app::ApplicationContext;
//! use izumi::command::{run_command, COMMANDS};
//! use izumi::Config;
//!
//! let mut context = ApplicationContext::with_defaults(Config::default());
//! let tokens: Vec<String> = ["n"].iter().map(|s| s.to_string()).collect();
//! assert!(run_command(&COMMANDS, &mut context, &tokens));
//! assert_eq!(context.window_count(), 1);
//! ```

pub mod resolver;
pub mod tree;
pub mod vocabulary;

pub use resolver::{dispatch, resolve, run_command, Invocation, Resolution};
pub use tree::{ArgsHandler, CommandDefinition, CommandKind, CommandTree, NoArgsHandler};
pub use vocabulary::{COMMANDS, PANEL_COMMANDS};

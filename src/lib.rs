//! Izumi: the interactive command layer of a terminal disassembly viewer.
//!
//! Izumi shows disassembly listings in one or more panels (windows) and is
//! driven by short typed commands. This crate provides:
//! - A static, hierarchical command vocabulary with aliases and subcommands
//! - A resolver that validates command lines and dispatches to handlers
//! - Window management (create, close, focus, sync)
//! - An incremental search cursor over each window's listing
//! - File-based logging and TOML configuration

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-oriented front end (main.rs)                  │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ tokens
//! ┌─────────────────────────────────────────────────────┐
//! │  Command Layer (command/)                           │
//! │  - Static command trees                             │
//! │  - Alias / subcommand resolution, arity checks      │
//! └─────────────────────────────────────────────────────┘
//!                        │ handler(context, args)
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ApplicationContext (windows, focus, config)      │
//! │  - Window search cursor state machine               │
//! └─────────────────────────────────────────────────────┘
//!                        │ Finder / Loader
//! ┌─────────────────────────────────────────────────────┐
//! │  Listing Layer (listing/)                           │
//! │  - Instruction tables, search primitive, loader     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Error types, search types (domain/)              │
//! │  - Paths (infrastructure/)                          │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application context, windows and command handlers
//! - [`command`]: Command trees, resolver and built-in vocabulary
//! - [`domain`]: Core types (errors, search queries)
//! - [`infrastructure`]: Platform paths and path resolution
//! - [`listing`]: Instruction tables, search primitive and loader
//! - [`observability`]: Tracing setup with file output
//!
//! # Configuration
//!
//! Startup configuration is read from a TOML file
//! (`~/.config/izumi/config.toml` by default):
//!
//! ```toml
//! bar_offset = 2
//! stage_width = 40
//! trace_level = "debug"
//! log_file = "/tmp/izumi.log"
//! ```
//!
//! `bar_offset` and `stage_width` can be changed at runtime with `set`; such
//! changes are not written back.
//!
//! # Example
//!
//! ```rust
//! use izumi::{command, initialize, Config};
//!
//! let mut context = initialize(&Config::default());
//! let line = |s: &str| s.split_whitespace().map(String::from).collect::<Vec<_>>();
//!
//! assert!(command::run_command(&command::COMMANDS, &mut context, &line("n")));
//! assert!(command::run_command(&command::COMMANDS, &mut context, &line("set stageWidth 48")));
//! assert!(!command::run_command(&command::COMMANDS, &mut context, &line("next")));
//! assert_eq!(context.config.stage_width, 48);
//! ```

pub mod app;
pub mod command;
pub mod domain;
pub mod infrastructure;
pub mod listing;

pub mod observability;

pub use app::{ApplicationContext, NavigationState, Window};
pub use domain::{IzumiError, Result};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default distance of the status bar from the bottom edge.
const DEFAULT_BAR_OFFSET: i32 = 0;

/// Default width of the address column.
const DEFAULT_STAGE_WIDTH: i32 = 32;

/// Runtime configuration.
///
/// Loaded once at startup; `bar_offset` and `stage_width` are then mutable
/// through the `set` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Offset of the status bar, in rows.
    #[serde(alias = "barOffset")]
    pub bar_offset: i32,

    /// Width of the address column, in cells.
    #[serde(alias = "stageWidth")]
    pub stage_width: i32,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `izumi.log` in the data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_offset: DEFAULT_BAR_OFFSET,
            stage_width: DEFAULT_STAGE_WIDTH,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::Config`] if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| IzumiError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::Io`] if the file cannot be read, or
    /// [`IzumiError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Sets a runtime option by name.
    ///
    /// Recognized names are `barOffset` and `stageWidth`, also accepted in
    /// their `bar_offset` / `stage_width` spelling. Values are decimal
    /// integers. On error the configuration is unchanged.
    ///
    /// # Errors
    ///
    /// - [`IzumiError::UnknownOption`] for any other name
    /// - [`IzumiError::InvalidOptionValue`] if `value` is not an integer
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        let slot = match name {
            "barOffset" | "bar_offset" => &mut self.bar_offset,
            "stageWidth" | "stage_width" => &mut self.stage_width,
            _ => return Err(IzumiError::UnknownOption(name.to_string())),
        };

        *slot = value
            .trim()
            .parse::<i32>()
            .map_err(|_| IzumiError::InvalidOptionValue {
                option: name.to_string(),
                value: value.to_string(),
            })?;

        tracing::debug!(option = name, value = *slot, "option set");
        Ok(())
    }
}

/// Creates the application context for `config`.
///
/// The context starts with no windows and uses the default listing backend
/// ([`listing::TableFinder`] and [`listing::TextListingLoader`]).
#[must_use]
pub fn initialize(config: &Config) -> ApplicationContext {
    tracing::debug!(
        bar_offset = config.bar_offset,
        stage_width = config.stage_width,
        "initializing izumi"
    );

    ApplicationContext::with_defaults(config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_accepts_both_spellings_and_defaults() {
        let config = Config::from_toml_str("barOffset = 4\ntrace_level = \"debug\"\n").unwrap();
        assert_eq!(config.bar_offset, 4);
        assert_eq!(config.stage_width, DEFAULT_STAGE_WIDTH);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));

        let config = Config::from_toml_str("stage_width = 12").unwrap();
        assert_eq!(config.stage_width, 12);
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = Config::from_toml_str("bar_offset = \"high\"").unwrap_err();
        assert!(matches!(err, IzumiError::Config(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "stage_width = 64\nlog_file = \"/tmp/x.log\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.stage_width, 64);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));

        assert!(matches!(Config::from_file(dir.path().join("missing.toml")), Err(IzumiError::Io(_))));
    }

    #[test]
    fn set_option_leaves_config_alone_on_error() {
        let mut config = Config::default();
        config.set_option("bar_offset", " 7 ").unwrap();
        assert_eq!(config.bar_offset, 7);

        let before = config.clone();
        assert!(config.set_option("barOffset", "").is_err());
        assert!(config.set_option("colour", "1").is_err());
        assert_eq!(config, before);
    }
}

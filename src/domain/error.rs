//! Error types for the Izumi command layer.
//!
//! This module defines the centralized error type [`IzumiError`] and a type alias
//! [`Result`] used throughout the crate. Every command either succeeds or fails
//! with exactly one of these variants; front ends that only care about the
//! boolean outcome can call [`Result::is_ok`].
//!
//! Errors fall into three groups:
//!
//! - **Resolution**: produced by the resolver before any handler runs
//!   (`EmptyCommand`, `UnknownCommand`, `MissingSubcommand`, `ArityMismatch`,
//!   `AliasCycle`).
//! - **Handler**: produced by command handlers (`NoWindow`, `FileNotFound`,
//!   `SearchNotFound`, ...). A failing handler leaves all state untouched.
//! - **Ambient**: I/O and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Izumi operations.
///
/// All variants are recoverable: the interface reports them and keeps
/// accepting commands.
///
/// # Examples
///
/// ```
/// use izumi::IzumiError;
///
/// let err = IzumiError::ArityMismatch { expected: 1, actual: 3 };
/// assert_eq!(err.to_string(), "Wrong number of arguments: expected 1, got 3");
/// ```
#[derive(Debug, Error)]
pub enum IzumiError {
    /// The command line contained no tokens.
    #[error("Empty command")]
    EmptyCommand,

    /// No definition with this name exists in the tree being searched.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A subcommand group was named without one of its subcommands.
    #[error("Missing subcommand for: {0}")]
    MissingSubcommand(String),

    /// The command received the wrong number of arguments.
    #[error("Wrong number of arguments: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Number of arguments the command accepts.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// Following aliases revisited a name already seen in this resolution.
    #[error("Alias cycle detected at: {0}")]
    AliasCycle(String),

    /// The command needs a window but none is open.
    #[error("No window open")]
    NoWindow,

    /// A window identifier argument could not be parsed.
    #[error("Invalid window id: {0}")]
    InvalidWindowId(String),

    /// The path given to `open` does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The path given to `open` exists but is not a regular file.
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The listing loader rejected the file.
    #[error("Failed to load listing: {0}")]
    Load(String),

    /// `set` was given an option name it does not know.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// `set` was given a value that does not parse for the option.
    #[error("Invalid value for {option}: {value}")]
    InvalidOptionValue {
        /// Option being set.
        option: String,
        /// Rejected value.
        value: String,
    },

    /// The search primitive found no match.
    #[error("Pattern not found: {0}")]
    SearchNotFound(String),

    /// `next` or `prev` was used before any successful search in this window.
    #[error("No active search")]
    NoActiveSearch,

    /// `prev` was used with the cursor already at the top of the listing.
    #[error("Already at the start of the listing")]
    AtSearchBoundary,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IzumiError {
    /// Returns `true` for errors raised while resolving the command line,
    /// before any handler ran.
    #[must_use]
    pub const fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyCommand
                | Self::UnknownCommand(_)
                | Self::MissingSubcommand(_)
                | Self::ArityMismatch { .. }
                | Self::AliasCycle(_)
        )
    }
}

/// A specialized `Result` type for Izumi operations.
pub type Result<T> = std::result::Result<T, IzumiError>;

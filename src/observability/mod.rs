//! File-based logging.
//!
//! `tracing` events from the whole crate are formatted by a
//! `tracing_subscriber::fmt` layer and written to a size-rotated log file.
//! The terminal itself is never written to, so logging cannot interfere with
//! the interactive display.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → izumi.log (+ rotated backups)
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, log_file_path};

//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform directories and path resolution used by `open` and by logging
//! setup.

pub mod paths;

pub use paths::{default_config_file, expand_tilde, get_data_dir, resolve_absolute};

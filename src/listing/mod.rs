//! Listing layer: instruction tables, search and loading.
//!
//! The command layer treats the listing as opaque and only talks to it through
//! the [`Finder`] and [`Loader`] traits. This module also ships the default
//! implementations used by the `izumi` binary.
//!
//! # Modules
//!
//! - `backend`: Collaborator traits
//! - `table`: In-memory instruction table and linear-scan finder
//! - `text`: Plain-text listing loader

pub mod backend;
pub mod table;
pub mod text;

pub use backend::{Finder, Loader};
pub use table::{Instruction, InstructionTable, TableFinder};
pub use text::TextListingLoader;

//! Listing backend abstraction.
//!
//! This module defines the two collaborator traits the command layer relies on
//! but does not implement itself: the pattern-search primitive ([`Finder`]) and
//! the file loader ([`Loader`]). The application context holds one of each as a
//! trait object, so front ends and tests can swap implementations freely.
//!
//! # Implementations
//!
//! - [`TableFinder`](crate::listing::TableFinder): linear scan over an
//!   [`InstructionTable`] (default)
//! - [`TextListingLoader`](crate::listing::TextListingLoader): plain-text
//!   `address text` listings (default)

use crate::domain::error::Result;
use crate::domain::search::{SearchQuery, SearchResult};
use crate::listing::table::InstructionTable;
use std::path::Path;

/// Pattern-search primitive over an instruction table.
///
/// Implementations must be pure with respect to the table: a query never
/// modifies anything, and an invalid result carries no position.
///
/// # Examples
///
/// ```
/// use izumi::domain::{Direction, SearchKind, SearchQuery};
/// use izumi::listing::{Finder, Instruction, InstructionTable, TableFinder};
///
/// let table = InstructionTable::new(vec![
///     Instruction::new(0x1000, "push rbp"),
///     Instruction::new(0x1001, "mov rbp, rsp"),
/// ]);
/// let query = SearchQuery {
///     pattern: "mov".into(),
///     kind: SearchKind::Instruction,
///     direction: Direction::Down,
///     start: 0,
/// };
/// assert_eq!(TableFinder.find(&table, &query).position(), Some(1));
/// ```
pub trait Finder {
    /// Runs `query` against `table`.
    fn find(&self, table: &InstructionTable, query: &SearchQuery) -> SearchResult;
}

/// Loads a listing file into an instruction table.
pub trait Loader {
    /// Reads and parses the file at `path`.
    ///
    /// `path` has already been resolved to an absolute regular file by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid listing.
    fn load(&self, path: &Path) -> Result<InstructionTable>;
}

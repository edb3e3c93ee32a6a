//! Windows and their incremental search cursor.
//!
//! Each [`Window`] owns a listing, a cursor into it and the last search that
//! moved the cursor. The three search operations form a small state machine:
//!
//! ```text
//!            find (ok)                 next/prev (ok: move cursor)
//!   Idle ────────────────► Active ◄───────────────┐
//!    ▲  │                    │ │                   │
//!    │  └─ find (miss) ──┐   │ └───────────────────┘
//!    └───────────────────┘   └─ find (ok): replace SearchState
//! ```
//!
//! # Invariants
//!
//! - The cursor only moves when a query succeeds.
//! - A failed query mutates nothing: cursor and `SearchState` stay as before.
//! - `prev` at cursor 0 fails without issuing any query.

use super::modes::NavigationState;
use crate::domain::error::{IzumiError, Result};
use crate::domain::search::{Direction, SearchKind, SearchQuery, SearchState};
use crate::listing::{Finder, InstructionTable};
use std::path::{Path, PathBuf};

/// A listing panel.
#[derive(Debug, Clone, Default)]
pub struct Window {
    filename: Option<PathBuf>,
    table: InstructionTable,
    cursor_position: usize,
    search: Option<SearchState>,
}

impl Window {
    /// Creates an empty window with no file loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    #[must_use]
    pub const fn table(&self) -> &InstructionTable {
        &self.table
    }

    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    #[must_use]
    pub const fn search_state(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn navigation_state(&self) -> NavigationState {
        self.search
            .as_ref()
            .map_or(NavigationState::Idle, |s| NavigationState::Active(s.kind))
    }

    /// Binds a freshly loaded listing to this window.
    ///
    /// The previous filename and table are dropped. The cursor returns to the
    /// top and any remembered search is forgotten, since it referred to the
    /// old listing.
    pub fn load(&mut self, filename: PathBuf, table: InstructionTable) {
        tracing::debug!(
            filename = %filename.display(),
            instructions = table.len(),
            "binding listing to window"
        );
        self.filename = Some(filename);
        self.table = table;
        self.cursor_position = 0;
        self.search = None;
    }

    /// Searches downward from the cursor and remembers the search on success.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::SearchNotFound`] if nothing matches; the window
    /// is left untouched.
    pub fn find(&mut self, finder: &dyn Finder, kind: SearchKind, pattern: &str) -> Result<usize> {
        let query = SearchQuery {
            pattern: pattern.to_string(),
            kind,
            direction: Direction::Down,
            start: self.cursor_position,
        };

        let position = self.run(finder, &query)?;
        self.search = Some(SearchState::new(pattern, kind));

        tracing::debug!(pattern = %pattern, kind = %kind, position, "search activated");
        Ok(position)
    }

    /// Repeats the remembered search downward, starting after the cursor.
    ///
    /// # Errors
    ///
    /// - [`IzumiError::NoActiveSearch`] if no search is remembered
    /// - [`IzumiError::SearchNotFound`] if nothing further matches
    pub fn next(&mut self, finder: &dyn Finder) -> Result<usize> {
        let state = self.search.as_ref().ok_or(IzumiError::NoActiveSearch)?;
        let query = state.query(Direction::Down, self.cursor_position + 1);
        self.run(finder, &query)
    }

    /// Repeats the remembered search upward, starting before the cursor.
    ///
    /// # Errors
    ///
    /// - [`IzumiError::NoActiveSearch`] if no search is remembered
    /// - [`IzumiError::AtSearchBoundary`] if the cursor is at position 0
    /// - [`IzumiError::SearchNotFound`] if nothing earlier matches
    pub fn prev(&mut self, finder: &dyn Finder) -> Result<usize> {
        let state = self.search.as_ref().ok_or(IzumiError::NoActiveSearch)?;
        let Some(start) = self.cursor_position.checked_sub(1) else {
            return Err(IzumiError::AtSearchBoundary);
        };
        let query = state.query(Direction::Up, start);
        self.run(finder, &query)
    }

    /// Issues `query` and moves the cursor only if it matched.
    fn run(&mut self, finder: &dyn Finder, query: &SearchQuery) -> Result<usize> {
        let result = finder.find(&self.table, query);
        let Some(position) = result.position() else {
            tracing::debug!(
                pattern = %query.pattern,
                direction = ?query.direction,
                start = query.start,
                "search missed"
            );
            return Err(IzumiError::SearchNotFound(query.pattern.clone()));
        };

        self.cursor_position = position;
        Ok(position)
    }
}

//! Search vocabulary shared by windows and the listing backend.
//!
//! A [`SearchQuery`] is what a window hands to the [`Finder`](crate::listing::Finder)
//! primitive; a [`SearchResult`] is what comes back. [`SearchState`] is the
//! remembered pattern that `next` and `prev` repeat.

use std::fmt;

/// What a search pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Match against instruction addresses.
    ProgramCounter,
    /// Match against instruction text.
    Instruction,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramCounter => f.write_str("pc"),
            Self::Instruction => f.write_str("inst"),
        }
    }
}

/// Scan direction from the start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward lower indices, start inclusive.
    Up,
    /// Toward higher indices, start inclusive.
    Down,
}

/// A single request to the search primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub pattern: String,
    pub kind: SearchKind,
    pub direction: Direction,
    /// Zero-based index the scan starts at.
    pub start: usize,
}

/// Outcome of a search.
///
/// An invalid result carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    position: Option<usize>,
}

impl SearchResult {
    #[must_use]
    pub const fn found(position: usize) -> Self {
        Self {
            position: Some(position),
        }
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self { position: None }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.position.is_some()
    }

    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }
}

/// The last search issued in a window.
///
/// Owned exclusively by its window and replaced as a whole; it is never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub pattern: String,
    pub kind: SearchKind,
}

impl SearchState {
    #[must_use]
    pub fn new(pattern: impl Into<String>, kind: SearchKind) -> Self {
        Self {
            pattern: pattern.into(),
            kind,
        }
    }

    /// Builds the query that repeats this search from `start`.
    #[must_use]
    pub fn query(&self, direction: Direction, start: usize) -> SearchQuery {
        SearchQuery {
            pattern: self.pattern.clone(),
            kind: self.kind,
            direction,
            start,
        }
    }
}

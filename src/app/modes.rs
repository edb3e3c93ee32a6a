//! Search navigation state of a window.
//!
//! A window is either **Idle** (no search issued yet) or **Active** (a search
//! pattern is remembered and `next`/`prev` can repeat it). The state is
//! derived from the window's `SearchState`; this enum is the read-only view
//! of it used for logging and by front ends.
//!
//! # Example
//!
//! ```rust
//! use izumi::app::{NavigationState, Window};
//!
//! let window = Window::new();
//! assert_eq!(window.navigation_state(), NavigationState::Idle);
//! ```

use crate::domain::search::SearchKind;

/// Navigation state of a window's search cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// No search has succeeded in this window yet.
    ///
    /// `next` and `prev` fail with `NoActiveSearch`.
    Idle,

    /// A search is remembered.
    ///
    /// Carries the kind of the remembered search.
    Active(SearchKind),
}

impl NavigationState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

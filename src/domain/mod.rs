//! Domain layer for the Izumi command layer.
//!
//! Core types that do not depend on the command tree, the application context
//! or any I/O.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`search`]: Search queries, results and the remembered search state
//!
//! # Examples
//!
//! ```
//! use izumi::domain::{SearchKind, SearchState, Direction};
//!
//! let state = SearchState::new("mov", SearchKind::Instruction);
//! let query = state.query(Direction::Down, 11);
//! assert_eq!(query.start, 11);
//! ```

pub mod error;
pub mod search;

pub use error::{IzumiError, Result};
pub use search::{Direction, SearchKind, SearchQuery, SearchResult, SearchState};

//! Application layer: mutable state and the handlers that change it.
//!
//! This module sits between the command resolver and the listing backend.
//! The resolver picks a handler; the handler mutates the
//! [`ApplicationContext`] and, for search commands, the focused [`Window`].
//!
//! # Architecture
//!
//! ```text
//! Command line → Resolver → Handler → Context / Window mutation → Ok / Err
//!                                         │
//!                                         └── Finder / Loader (listing backend)
//! ```
//!
//! # Modules
//!
//! - [`context`]: Windows, focus, configuration and quit flag
//! - [`handlers`]: One function per command in the vocabulary
//! - [`modes`]: Search navigation state of a window
//! - [`window`]: Window contents and the search cursor state machine

pub mod context;
pub mod handlers;
pub mod modes;
pub mod window;

pub use context::ApplicationContext;
pub use modes::NavigationState;
pub use window::Window;

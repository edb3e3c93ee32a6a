//! Application context shared by every command handler.
//!
//! [`ApplicationContext`] is the single mutable state container of the
//! command layer: the window list, which window has focus, the runtime
//! configuration and the quit flag. It also owns the listing collaborators
//! (search primitive and loader) so handlers can reach them without globals.
//!
//! # Window Addressing
//!
//! Windows live in an ordered `Vec` and are addressed by index. The focus
//! index is checked against the current length on every access. Closing a
//! window reindexes focus as follows:
//!
//! - a window before the focused one: focus shifts down by one, staying on the
//!   same window
//! - the focused window itself: focus stays at the same index, clamped to the
//!   new last window
//! - the last remaining window: focus resets to 0
//!
//! # Example
//!
//! ```rust
//! use izumi::app::ApplicationContext;
//! use izumi::Config;
//!
//! let mut context = ApplicationContext::with_defaults(Config::default());
//! context.new_window();
//! context.new_window();
//! assert_eq!(context.focused_index(), 1);
//! context.focus_prev();
//! assert_eq!(context.focused_index(), 0);
//! ```

use super::window::Window;
use crate::domain::error::{IzumiError, Result};
use crate::listing::{Finder, Loader, TableFinder, TextListingLoader};
use crate::Config;
use std::fmt;

/// Central application state container.
pub struct ApplicationContext {
    windows: Vec<Window>,

    /// Index of the window receiving window-scoped commands.
    ///
    /// Always `< windows.len()` when windows exist, 0 otherwise.
    focused_index: usize,

    /// Whether panels scroll together. Read by the renderer.
    pub windows_synced: bool,

    /// Runtime configuration, mutated by `set`.
    pub config: Config,

    /// Set by `quit`; the run loop exits once it observes this.
    pub quit_requested: bool,

    finder: Box<dyn Finder>,
    loader: Box<dyn Loader>,
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("windows", &self.windows)
            .field("focused_index", &self.focused_index)
            .field("windows_synced", &self.windows_synced)
            .field("config", &self.config)
            .field("quit_requested", &self.quit_requested)
            .finish_non_exhaustive()
    }
}

impl ApplicationContext {
    /// Creates a context with no windows and the given collaborators.
    #[must_use]
    pub fn new(config: Config, finder: Box<dyn Finder>, loader: Box<dyn Loader>) -> Self {
        Self {
            windows: Vec::new(),
            focused_index: 0,
            windows_synced: false,
            config,
            quit_requested: false,
            finder,
            loader,
        }
    }

    /// Creates a context using [`TableFinder`] and [`TextListingLoader`].
    #[must_use]
    pub fn with_defaults(config: Config) -> Self {
        Self::new(config, Box::new(TableFinder), Box::new(TextListingLoader))
    }

    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    #[must_use]
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Returns the focused window, or `None` when no window is open.
    #[must_use]
    pub fn focused_window(&self) -> Option<&Window> {
        self.windows.get(self.focused_index)
    }

    /// Returns the focused window for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::NoWindow`] when no window is open.
    pub fn focused_window_mut(&mut self) -> Result<&mut Window> {
        self.windows
            .get_mut(self.focused_index)
            .ok_or(IzumiError::NoWindow)
    }

    #[must_use]
    pub fn loader(&self) -> &dyn Loader {
        self.loader.as_ref()
    }

    /// Runs `op` against the focused window and the search primitive.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::NoWindow`] when no window is open, otherwise
    /// whatever `op` returns.
    pub fn with_focused_search<T>(
        &mut self,
        op: impl FnOnce(&mut Window, &dyn Finder) -> Result<T>,
    ) -> Result<T> {
        let window = self
            .windows
            .get_mut(self.focused_index)
            .ok_or(IzumiError::NoWindow)?;
        op(window, self.finder.as_ref())
    }

    /// Opens a new empty window and focuses it. Returns its index.
    pub fn new_window(&mut self) -> usize {
        self.windows.push(Window::new());
        self.focused_index = self.windows.len() - 1;

        tracing::debug!(
            window = self.focused_index,
            total = self.windows.len(),
            "window created"
        );
        self.focused_index
    }

    /// Closes the window at `index`, reindexing focus.
    ///
    /// Returns `false` without changing anything if `index` is out of range.
    pub fn close_window(&mut self, index: usize) -> bool {
        if index >= self.windows.len() {
            tracing::debug!(window = index, total = self.windows.len(), "no such window to close");
            return false;
        }

        self.windows.remove(index);

        if self.windows.is_empty() {
            self.focused_index = 0;
        } else if index < self.focused_index {
            self.focused_index -= 1;
        } else {
            self.focused_index = self.focused_index.min(self.windows.len() - 1);
        }

        tracing::debug!(
            window = index,
            focused = self.focused_index,
            remaining = self.windows.len(),
            "window closed"
        );
        true
    }

    pub fn close_all_windows(&mut self) {
        tracing::debug!(closed = self.windows.len(), "closing all windows");
        self.windows.clear();
        self.focused_index = 0;
    }

    /// Moves focus to the next window. No-op at the last window.
    pub fn focus_next(&mut self) {
        if self.focused_index + 1 < self.windows.len() {
            self.focused_index += 1;
        }
    }

    /// Moves focus to the previous window. No-op at the first window.
    pub fn focus_prev(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(windows: usize) -> ApplicationContext {
        let mut context = ApplicationContext::with_defaults(Config::default());
        for _ in 0..windows {
            context.new_window();
        }
        context
    }

    #[test]
    fn new_window_takes_focus() {
        let mut context = context_with(0);
        assert!(context.focused_window().is_none());
        assert_eq!(context.new_window(), 0);
        assert_eq!(context.new_window(), 1);
        assert_eq!(context.focused_index(), 1);
    }

    #[test]
    fn focus_is_clamped_at_both_ends() {
        let mut context = context_with(3);
        context.focus_next();
        assert_eq!(context.focused_index(), 2);

        context.focus_prev();
        context.focus_prev();
        context.focus_prev();
        assert_eq!(context.focused_index(), 0);
    }

    #[test]
    fn closing_before_focus_keeps_same_window_focused() {
        let mut context = context_with(3);
        assert!(context.close_window(0));
        assert_eq!(context.focused_index(), 1);
        assert_eq!(context.window_count(), 2);
    }

    #[test]
    fn closing_focused_last_window_moves_focus_back() {
        let mut context = context_with(3);
        assert!(context.close_window(2));
        assert_eq!(context.focused_index(), 1);
    }

    #[test]
    fn closing_focused_middle_window_keeps_index() {
        let mut context = context_with(3);
        context.focus_prev();
        assert!(context.close_window(1));
        assert_eq!(context.focused_index(), 1);
    }

    #[test]
    fn closing_out_of_range_is_rejected() {
        let mut context = context_with(1);
        assert!(!context.close_window(4));
        assert_eq!(context.window_count(), 1);
    }

    #[test]
    fn closing_everything_resets_focus() {
        let mut context = context_with(2);
        context.close_all_windows();
        assert_eq!(context.window_count(), 0);
        assert_eq!(context.focused_index(), 0);
        assert!(matches!(context.focused_window_mut(), Err(IzumiError::NoWindow)));
    }
}

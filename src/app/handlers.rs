//! Command handlers.
//!
//! Every function here is bound to a name in the command vocabulary
//! ([`crate::command::vocabulary`]) and receives the application context plus,
//! for argument-taking commands, the tokens left after resolution. The
//! resolver has already checked arity for fixed-arity commands; handlers
//! still destructure their arguments with slice patterns rather than index.
//!
//! # Failure Semantics
//!
//! A handler that returns `Err` has not mutated the context, with one
//! documented exception: [`open`] creates a window before checking the file,
//! so that a failed first `open` still leaves an empty window to work in.
//!
//! # Example
//!
//! ```rust
//! use izumi::app::{handlers, ApplicationContext};
//! use izumi::Config;
//!
//! let mut context = ApplicationContext::with_defaults(Config::default());
//! handlers::new_panel(&mut context)?;
//! handlers::set(&mut context, &["barOffset".to_string(), "5".to_string()])?;
//! assert_eq!(context.config.bar_offset, 5);
//! # Ok::<(), izumi::IzumiError>(())
//! ```

use super::context::ApplicationContext;
use crate::domain::error::{IzumiError, Result};
use crate::domain::search::SearchKind;
use crate::infrastructure::paths;

/// `newpanel`: opens an empty window and focuses it.
pub fn new_panel(context: &mut ApplicationContext) -> Result<()> {
    context.new_window();
    Ok(())
}

/// `closepanel [id]`: closes window `id`, or the focused window.
///
/// # Errors
///
/// - [`IzumiError::InvalidWindowId`] if `id` is not a non-negative integer
/// - [`IzumiError::ArityMismatch`] if more than one argument is given
pub fn close_panel(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
    let index = match args {
        [] => context.focused_index(),
        [id] => id
            .parse::<usize>()
            .map_err(|_| IzumiError::InvalidWindowId(id.clone()))?,
        _ => {
            return Err(IzumiError::ArityMismatch {
                expected: 1,
                actual: args.len(),
            })
        }
    };

    context.close_window(index);
    Ok(())
}

/// `closeallpanels`: closes every window.
pub fn close_all_panels(context: &mut ApplicationContext) -> Result<()> {
    context.close_all_windows();
    Ok(())
}

/// `open path`: loads a listing into the focused window.
///
/// Creates a window first if none is open. The focused window is only
/// touched once the file has been found and loaded successfully.
///
/// # Errors
///
/// - [`IzumiError::FileNotFound`] if `path` does not exist
/// - [`IzumiError::NotAFile`] if `path` is not a regular file
/// - any error from the configured loader
pub fn open(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
    let [path] = args else {
        return Err(IzumiError::ArityMismatch {
            expected: 1,
            actual: args.len(),
        });
    };

    if context.window_count() == 0 {
        context.new_window();
    }

    let resolved = paths::resolve_absolute(path)?;
    if !resolved.is_file() {
        return Err(IzumiError::NotAFile(resolved));
    }

    let table = context.loader().load(&resolved)?;
    context.focused_window_mut()?.load(resolved, table);
    Ok(())
}

/// `panelcmd j`: focuses the next window.
pub fn panel_focus_next(context: &mut ApplicationContext) -> Result<()> {
    context.focus_next();
    Ok(())
}

/// `panelcmd k`: focuses the previous window.
pub fn panel_focus_prev(context: &mut ApplicationContext) -> Result<()> {
    context.focus_prev();
    Ok(())
}

/// `set option value`: changes a runtime option.
///
/// # Errors
///
/// See [`Config::set_option`](crate::Config::set_option).
pub fn set(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
    let [option, value] = args else {
        return Err(IzumiError::ArityMismatch {
            expected: 2,
            actual: args.len(),
        });
    };

    context.config.set_option(option, value)
}

/// `panelsync`: makes windows scroll together.
pub fn panel_sync(context: &mut ApplicationContext) -> Result<()> {
    context.windows_synced = true;
    Ok(())
}

/// `paneldesync`: lets windows scroll independently.
pub fn panel_desync(context: &mut ApplicationContext) -> Result<()> {
    context.windows_synced = false;
    Ok(())
}

fn find_by_kind(context: &mut ApplicationContext, args: &[String], kind: SearchKind) -> Result<()> {
    let [pattern] = args else {
        return Err(IzumiError::ArityMismatch {
            expected: 1,
            actual: args.len(),
        });
    };

    context
        .with_focused_search(|window, finder| window.find(finder, kind, pattern))
        .map(|_| ())
}

/// `findpc pattern`: searches addresses downward from the cursor.
pub fn find_pc(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
    find_by_kind(context, args, SearchKind::ProgramCounter)
}

/// `findinst pattern`: searches instruction text downward from the cursor.
pub fn find_inst(context: &mut ApplicationContext, args: &[String]) -> Result<()> {
    find_by_kind(context, args, SearchKind::Instruction)
}

/// `next`: repeats the last search below the cursor.
pub fn next(context: &mut ApplicationContext) -> Result<()> {
    context
        .with_focused_search(|window, finder| window.next(finder))
        .map(|_| ())
}

/// `prev`: repeats the last search above the cursor.
pub fn prev(context: &mut ApplicationContext) -> Result<()> {
    context
        .with_focused_search(|window, finder| window.prev(finder))
        .map(|_| ())
}

/// `quit`: asks the run loop to stop.
pub fn quit(context: &mut ApplicationContext) -> Result<()> {
    tracing::debug!("quit requested");
    context.quit_requested = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use std::io::Write;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn context() -> ApplicationContext {
        ApplicationContext::with_defaults(Config::default())
    }

    fn listing(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn close_panel_without_id_closes_focused() {
        let mut context = context();
        for _ in 0..3 {
            new_panel(&mut context).unwrap();
        }
        panel_focus_prev(&mut context).unwrap();

        close_panel(&mut context, &[]).unwrap();
        assert_eq!(context.window_count(), 2);
        assert_eq!(context.focused_index(), 1);
    }

    #[test]
    fn close_panel_with_id_ignores_focus() {
        let mut context = context();
        for _ in 0..3 {
            new_panel(&mut context).unwrap();
        }

        close_panel(&mut context, &args(&["0"])).unwrap();
        assert_eq!(context.window_count(), 2);
        assert_eq!(context.focused_index(), 1);
    }

    #[test]
    fn close_panel_rejects_bad_ids() {
        let mut context = context();
        new_panel(&mut context).unwrap();

        assert!(matches!(
            close_panel(&mut context, &args(&["first"])),
            Err(IzumiError::InvalidWindowId(id)) if id == "first"
        ));
        assert!(matches!(
            close_panel(&mut context, &args(&["0", "1"])),
            Err(IzumiError::ArityMismatch { expected: 1, actual: 2 })
        ));
        assert_eq!(context.window_count(), 1);
    }

    #[test]
    fn open_missing_file_creates_window_but_no_filename() {
        let mut context = context();
        let err = open(&mut context, &args(&["/definitely/not/here.bin"])).unwrap_err();

        assert!(matches!(err, IzumiError::FileNotFound(_)));
        assert_eq!(context.window_count(), 1);
        assert!(context.focused_window().unwrap().filename().is_none());
    }

    #[test]
    fn open_missing_file_keeps_existing_filename() {
        let file = listing(&["0x10 nop"]);
        let mut context = context();
        open(&mut context, &args(&[file.path().to_str().unwrap()])).unwrap();
        let before = context.focused_window().unwrap().filename().map(ToOwned::to_owned);

        assert!(open(&mut context, &args(&["/definitely/not/here.bin"])).is_err());
        assert_eq!(context.window_count(), 1);
        assert_eq!(context.focused_window().unwrap().filename().map(ToOwned::to_owned), before);
    }

    #[test]
    fn open_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut context = context();
        let err = open(&mut context, &args(&[dir.path().to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, IzumiError::NotAFile(_)));
    }

    #[test]
    fn open_malformed_listing_leaves_window_alone() {
        let good = listing(&["0x10 nop"]);
        let bad = listing(&["not-an-address nop"]);
        let mut context = context();
        open(&mut context, &args(&[good.path().to_str().unwrap()])).unwrap();

        assert!(matches!(
            open(&mut context, &args(&[bad.path().to_str().unwrap()])),
            Err(IzumiError::Load(_))
        ));
        assert_eq!(context.focused_window().unwrap().table().len(), 1);
    }

    #[test]
    fn open_binds_absolute_path_and_table() {
        let file = listing(&["0x1000 push rbp", "0x1001 ret"]);
        let mut context = context();
        open(&mut context, &args(&[file.path().to_str().unwrap()])).unwrap();

        let window = context.focused_window().unwrap();
        assert!(window.filename().unwrap().is_absolute());
        assert_eq!(window.table().len(), 2);
    }

    #[test]
    fn set_updates_known_options_only() {
        let mut context = context();
        set(&mut context, &args(&["barOffset", "5"])).unwrap();
        set(&mut context, &args(&["stage_width", "-3"])).unwrap();
        assert_eq!(context.config.bar_offset, 5);
        assert_eq!(context.config.stage_width, -3);

        let before = context.config.clone();
        assert!(matches!(set(&mut context, &args(&["bogus", "5"])), Err(IzumiError::UnknownOption(_))));
        assert!(matches!(
            set(&mut context, &args(&["barOffset", "five"])),
            Err(IzumiError::InvalidOptionValue { .. })
        ));
        assert_eq!(context.config, before);
    }

    #[test]
    fn sync_flags_and_quit() {
        let mut context = context();
        panel_sync(&mut context).unwrap();
        assert!(context.windows_synced);
        panel_desync(&mut context).unwrap();
        assert!(!context.windows_synced);

        quit(&mut context).unwrap();
        assert!(context.quit_requested);
    }

    #[test]
    fn searches_need_a_window() {
        let mut context = context();
        assert!(matches!(find_pc(&mut context, &args(&["0x10"])), Err(IzumiError::NoWindow)));
        assert!(matches!(next(&mut context), Err(IzumiError::NoWindow)));
        assert!(matches!(prev(&mut context), Err(IzumiError::NoWindow)));
    }

    #[test]
    fn find_pc_with_bare_prefix_fails_without_moving() {
        let file = listing(&["0x1000 push rbp", "0x1001 ret"]);
        let mut context = context();
        open(&mut context, &args(&[file.path().to_str().unwrap()])).unwrap();
        find_inst(&mut context, &args(&["ret"])).unwrap();

        assert!(matches!(find_pc(&mut context, &args(&["0x"])), Err(IzumiError::SearchNotFound(_))));
        let window = context.focused_window().unwrap();
        assert_eq!(window.cursor_position(), 1);
        assert_eq!(window.navigation_state(), crate::NavigationState::Active(SearchKind::Instruction));
    }

    #[test]
    fn search_walks_real_listing() {
        let file = listing(&[
            "0x1000 push rbp",
            "0x1001 mov rbp, rsp",
            "0x1004 nop",
            "0x1005 mov eax, 0",
            "0x100a ret",
        ]);
        let mut context = context();
        open(&mut context, &args(&[file.path().to_str().unwrap()])).unwrap();

        find_inst(&mut context, &args(&["mov"])).unwrap();
        assert_eq!(context.focused_window().unwrap().cursor_position(), 1);
        next(&mut context).unwrap();
        assert_eq!(context.focused_window().unwrap().cursor_position(), 3);
        assert!(matches!(next(&mut context), Err(IzumiError::SearchNotFound(_))));
        prev(&mut context).unwrap();
        assert_eq!(context.focused_window().unwrap().cursor_position(), 1);

        find_pc(&mut context, &args(&["0x100a"])).unwrap();
        assert_eq!(context.focused_window().unwrap().cursor_position(), 4);
    }
}

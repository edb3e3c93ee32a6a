//! Line-oriented front end for the Izumi command layer.
//!
//! Reads one command per line from standard input, splits it on whitespace,
//! dispatches it against the built-in vocabulary and prints the outcome.
//! Rendering proper is the job of the full-screen UI; this front end prints a
//! one-line status of the focused window after every command so the effect of
//! each command stays visible.
//!
//! # Usage
//!
//! ```text
//! izumi [--config FILE] [--trace-level LEVEL] [LISTING...]
//! ```
//!
//! Each `LISTING` is opened into its own window before the prompt appears.
//! The session ends on `quit` (`q`) or end of input.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use izumi::command::{self, COMMANDS};
use izumi::infrastructure::default_config_file;
use izumi::{ApplicationContext, Config, IzumiError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "izumi")]
#[command(about = "Terminal disassembly viewer command shell", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, env = "IZUMI_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Listings to open at startup, one window each
    files: Vec<String>,
}

fn load_config(args: &Args) -> izumi::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => match default_config_file().filter(|path| path.is_file()) {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        },
    };

    if args.trace_level.is_some() {
        config.trace_level.clone_from(&args.trace_level);
    }
    Ok(config)
}

fn describe(error: &IzumiError) -> String {
    match error {
        IzumiError::UnknownCommand(name) => COMMANDS.closest(name).map_or_else(
            || format!("error: {error}"),
            |suggestion| format!("error: {error} (did you mean `{suggestion}`?)"),
        ),
        _ => format!("error: {error}"),
    }
}

fn status_line(context: &ApplicationContext) -> String {
    let Some(window) = context.focused_window() else {
        return "[no window]".to_string();
    };

    let name = window
        .filename()
        .map_or_else(|| "<empty>".to_string(), |p| p.display().to_string());
    let position = window.cursor_position();
    let current = window
        .table()
        .get(position)
        .map_or_else(String::new, |inst| format!(" {:#x}: {}", inst.address, inst.text));
    let sync = if context.windows_synced { " sync" } else { "" };

    format!(
        "[{}/{}{sync}] {name} @{position}{current}",
        context.focused_index() + 1,
        context.window_count(),
    )
}

fn run(context: &mut ApplicationContext) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, ":")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();

        if !tokens.is_empty() {
            match command::dispatch(&COMMANDS, context, &tokens) {
                Ok(()) => writeln!(stdout, "ok")?,
                Err(e) => writeln!(stdout, "{}", describe(&e))?,
            }
            writeln!(stdout, "{}", status_line(context))?;
        }

        if context.quit_requested {
            return Ok(());
        }

        write!(stdout, ":")?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("izumi: {e}");
            return ExitCode::FAILURE;
        }
    };

    izumi::observability::init_tracing(&config);
    tracing::info!(files = args.files.len(), "izumi starting");

    let mut context = izumi::initialize(&config);

    for file in &args.files {
        context.new_window();
        let tokens = vec!["open".to_string(), file.clone()];
        if let Err(e) = command::dispatch(&COMMANDS, &mut context, &tokens) {
            eprintln!("izumi: {file}: {e}");
        }
    }

    if let Err(e) = run(&mut context) {
        eprintln!("izumi: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("izumi exiting");
    ExitCode::SUCCESS
}

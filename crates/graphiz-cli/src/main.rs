//! Graphiz CLI entry point: interactive REPL and script runner.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use graphiz_core::GraphizConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::commands::{handle_command, CommandResult, Session};

#[derive(Parser, Debug)]
#[command(name = "graphiz")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "GRAPHIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Run commands from a script file instead of the REPL
    #[arg(short, long, env = "GRAPHIZ_SCRIPT")]
    script: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "GRAPHIZ_LOG_FILTER")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout stays reserved for command output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| args.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GraphizConfig::load(args.config.as_deref())?;
    tracing::debug!(config = ?args.config, "configuration loaded");
    let interactive = args.script.is_none();
    let mut session = Session::new(config, interactive);

    match args.script {
        Some(path) => run_script(&mut session, &path),
        None => run_repl(&mut session),
    }
}

/// Runs every line of a script file, stopping early only on `quit`.
///
/// Failed commands are reported and skipped so a typo does not throw away
/// the rest of the script.
fn run_script(session: &mut Session, path: &Path) -> anyhow::Result<()> {
    tracing::info!(script = %path.display(), "running script");
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match handle_command(session, line) {
            CommandResult::Continue => {}
            CommandResult::Quit => break,
            CommandResult::Error(message) => {
                eprintln!("{} {message}", "Error:".red());
            }
        }
    }
    Ok(())
}

fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    println!(
        "{} v{}",
        "Graphiz".bold().cyan(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "Type {} for commands, {} to leave.",
        "help".yellow(),
        "quit".yellow()
    );

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("graphiz> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match handle_command(session, line) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(message) => {
                        eprintln!("{} {message}", "Error:".red());
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    println!("bye");
    Ok(())
}

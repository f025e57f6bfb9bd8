//! # hexagonal
//!
//! Converts a Laravel project to a hexagonal (ports and adapters) layout.
//!
//! ## Startup sequence
//!
//! 1. Detect the run mode and register commands for it.
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Resolve the project root and load configuration.
//! 5. Build the [`OutputManager`] and dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use hexagonal_core::application::registration::RunMode;

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod provider;

fn main() -> ExitCode {
    // `.env` belongs to the project at --base-path, so it is read during
    // config loading rather than from the working directory here.

    // ── 1. + 2. Register and parse ────────────────────────────────────────
    let mode = RunMode::detect();
    let cli = match Cli::try_parse(mode) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with code 0; usage errors to
            // stderr with code 2.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        ?mode,
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 4. – 6. ───────────────────────────────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, mode) {
        Ok(()) => {
            info!("hexagonal completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, mode: RunMode) -> CliResult<()> {
    match cli.command {
        Commands::Completions(cmd) => commands::completions::execute(cmd, mode),
        Commands::Install => {
            let (base, config, output) = prepare(&cli.global)?;
            commands::install::execute(&base, config, output)
        }
        Commands::Config(cmd) => {
            let (base, config, output) = prepare(&cli.global)?;
            let path = AppConfig::config_path(&base, cli.global.config.as_ref());
            commands::config::execute(cmd, config, path, output)
        }
    }
}

/// Project root, configuration and output for project-bound commands.
fn prepare(global: &GlobalArgs) -> CliResult<(PathBuf, AppConfig, OutputManager)> {
    let base = resolve_base_path(global.base_path.as_deref())?;
    let config = AppConfig::load(&base, global.config.as_ref())?;
    debug!(base = %base.display(), ?config, "Configuration loaded");
    let output = OutputManager::new(global, &config);
    Ok((base, config, output))
}

/// `--base-path` if given, else the working directory. Must be a directory.
fn resolve_base_path(base_path: Option<&Path>) -> CliResult<PathBuf> {
    let base = match base_path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().with_cli_context(|| "Failed to read working directory")?,
    };
    if !base.is_dir() {
        return Err(CliError::ProjectRootNotFound { path: base });
    }
    Ok(base)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is
    // redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = provider::command(RunMode::Console);
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        assert!(provider::command(RunMode::Console).get_author().is_some());
    }

    #[test]
    fn missing_base_path_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_base_path(Some(&tmp.path().join("gone"))).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn existing_base_path_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(resolve_base_path(Some(tmp.path())).unwrap(), tmp.path());
    }
}

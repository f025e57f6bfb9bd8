//! CLI argument definitions.
//!
//! The root command and its built-in subcommands are declared here; the
//! installer command itself is added by [`crate::provider`] only when the
//! run mode allows it.  No business logic lives here.

use std::ffi::OsString;

use clap::{ArgMatches, Args, Command, FromArgMatches, Subcommand, ValueEnum};

use hexagonal_core::application::registration::{INSTALL_COMMAND, RunMode};

use crate::provider;

pub mod global;
pub use global::GlobalArgs;

pub const BIN_NAME: &str = "hexagonal";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// A parsed invocation.
#[derive(Debug)]
pub struct Cli {
    /// Flags available on every subcommand.
    pub global: GlobalArgs,

    /// Subcommand to execute.
    pub command: Commands,
}

/// Every subcommand the binary can dispatch.
#[derive(Debug)]
pub enum Commands {
    /// `hex:install`; takes no arguments of its own.
    Install,
    Completions(CompletionsArgs),
    Config(ConfigCommands),
}

impl Cli {
    /// Parse the process arguments for the given run mode.
    pub fn try_parse(mode: RunMode) -> Result<Self, clap::Error> {
        Self::try_parse_from(mode, std::env::args_os())
    }

    pub fn try_parse_from<I, T>(mode: RunMode, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = provider::command(mode).try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let global = GlobalArgs::from_arg_matches(matches)?;
        let command = match matches.subcommand() {
            Some((name, _)) if name == INSTALL_COMMAND.name => Commands::Install,
            Some(("completions", sub)) => {
                Commands::Completions(CompletionsArgs::from_arg_matches(sub)?)
            }
            Some(("config", sub)) => Commands::Config(ConfigCommands::from_arg_matches(sub)?),
            _ => {
                return Err(clap::Error::new(
                    clap::error::ErrorKind::MissingSubcommand,
                ));
            }
        };
        Ok(Self { global, command })
    }
}

/// Root command with the built-in subcommands, before registration.
pub fn base_command() -> Command {
    let root = Command::new(BIN_NAME)
        .bin_name(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("\u{2b21} Hexagonal architecture installer for Laravel")
        .long_about(
            "Converts a Laravel project to a hexagonal (ports and adapters) layout: \
             creates the src/ skeleton, publishes AI context documents, moves the \
             default User model and registers the Src\\ autoload prefix.",
        )
        .after_help(
            "EXAMPLES:\n\
            \x20 hexagonal hex:install\n\
            \x20 hexagonal hex:install --base-path ../my-app\n\
            \x20 hexagonal completions bash > ~/.local/share/bash-completion/completions/hexagonal",
        )
        .arg_required_else_help(true)
        .subcommand_required(true);

    GlobalArgs::augment_args(root)
        .subcommand(CompletionsArgs::augment_args(
            Command::new("completions")
                .about("Generate shell completions")
                .after_help(
                    "EXAMPLES:\n\
                    \x20 hexagonal completions bash > ~/.local/share/bash-completion/completions/hexagonal\n\
                    \x20 hexagonal completions zsh  > ~/.zfunc/_hexagonal",
                ),
        ))
        .subcommand(ConfigCommands::augment_subcommands(
            Command::new("config")
                .about("Configuration inspection")
                .subcommand_required(true),
        ))
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hexagonal completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hexagonal config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    List,
    /// Print the path of the configuration file that is read.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(RunMode::Console, args)
    }

    #[test]
    fn verify_cli_structure() {
        provider::command(RunMode::Console).debug_assert();
    }

    #[test]
    fn parse_install_command() {
        let cli = parse(&["hexagonal", "hex:install"]).unwrap();
        assert!(matches!(cli.command, Commands::Install));
    }

    #[test]
    fn install_takes_no_arguments() {
        assert!(parse(&["hexagonal", "hex:install", "extra"]).is_err());
        assert!(parse(&["hexagonal", "hex:install", "--force"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["hexagonal", "hex:install", "-vv", "--base-path", "/srv/app"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(
            cli.global.base_path.as_deref(),
            Some(std::path::Path::new("/srv/app"))
        );
    }

    #[test]
    fn install_is_unknown_when_serving() {
        let err = Cli::try_parse_from(RunMode::Serving, ["hexagonal", "hex:install"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn config_subcommands() {
        let cli = parse(&["hexagonal", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        assert!(parse(&["hexagonal", "--quiet", "--verbose", "hex:install"]).is_err());
    }
}

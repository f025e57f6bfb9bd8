//! Flags shared by every subcommand.
//!
//! Flattened into the root command with `global = true`, so they may appear
//! before or after the subcommand name.

use std::path::PathBuf;

use clap::Args;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Logging verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Logging verbosity on stderr:
    (none)  - warnings and errors
    -v      - install progress
    -vv     - resolved configuration and skipped steps
    -vvv    - every filesystem call"
    )]
    pub verbose: u8,

    /// Print nothing but errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain output. Any non-empty `NO_COLOR` other than a falsey value
    /// turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of `<base>/hexagonal.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file (default: <base>/hexagonal.toml)"
    )]
    pub config: Option<PathBuf>,

    /// Laravel project to convert.
    #[arg(
        long = "base-path",
        global = true,
        value_name = "DIR",
        env = "HEX_BASE_PATH",
        help = "Project root (default: current directory)"
    )]
    pub base_path: Option<PathBuf>,
}

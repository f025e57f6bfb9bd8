//! Shell completion generation.

use clap_complete::{generate, shells};

use hexagonal_core::application::registration::RunMode;

use crate::{
    cli::{BIN_NAME, CompletionsArgs, Shell},
    error::CliResult,
    provider,
};

/// Completions cover the commands registered for `mode`.
pub fn execute(args: CompletionsArgs, mode: RunMode) -> CliResult<()> {
    let mut cmd = provider::command(mode);
    let out = &mut std::io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, out),
    };

    Ok(())
}

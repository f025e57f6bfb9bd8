//! Command registration against the clap command tree.
//!
//! `hexagonal-core` decides which commands exist for a run mode; this module
//! turns each registration into a clap subcommand.

use clap::Command;

use hexagonal_core::application::registration::{CommandRegistry, CommandSpec, RunMode, boot};

use crate::cli;

/// [`CommandRegistry`] backed by a `clap::Command`.
pub struct ClapRegistry {
    command: Command,
}

impl ClapRegistry {
    pub fn new(command: Command) -> Self {
        Self { command }
    }

    pub fn into_command(self) -> Command {
        self.command
    }
}

impl CommandRegistry for ClapRegistry {
    fn register(&mut self, spec: &CommandSpec) {
        let command = std::mem::take(&mut self.command);
        self.command = command.subcommand(Command::new(spec.name).about(spec.about));
    }
}

/// Full command tree for `mode`.
pub fn command(mode: RunMode) -> Command {
    let mut registry = ClapRegistry::new(cli::base_command());
    boot(mode, &mut registry);
    registry.into_command()
}

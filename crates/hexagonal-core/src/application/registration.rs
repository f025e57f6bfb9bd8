//! Command registration.
//!
//! The installer is only offered when the host runs as a command-line tool.
//! A host that is serving requests boots without it.

use tracing::debug;

/// How the host process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive command-line invocation.
    Console,
    /// Serving requests; no console commands are registered.
    Serving,
}

impl RunMode {
    /// Environment variable that overrides console detection.
    pub const ENV_VAR: &'static str = "APP_RUNNING_IN_CONSOLE";

    /// Detect the run mode from [`Self::ENV_VAR`]. Unset means console.
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// `"true"` or `"1"` (any case) mean console; any other value means the
    /// host is serving.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None => Self::Console,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Self::Console,
            Some(_) => Self::Serving,
        }
    }
}

/// A command a host can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
}

/// The installer command.
pub const INSTALL_COMMAND: CommandSpec = CommandSpec {
    name: "hex:install",
    about: "Install the hexagonal layout and AI context documents",
};

/// Something that can receive command registrations (e.g. a clap command
/// tree).
pub trait CommandRegistry {
    fn register(&mut self, spec: &CommandSpec);
}

/// Register the installer's commands for the given run mode.
pub fn boot(mode: RunMode, registry: &mut dyn CommandRegistry) {
    if mode == RunMode::Console {
        debug!(command = INSTALL_COMMAND.name, "Registering console command");
        registry.register(&INSTALL_COMMAND);
    }
}

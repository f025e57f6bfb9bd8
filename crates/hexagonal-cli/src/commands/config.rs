//! `hexagonal config`: inspect the resolved configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_path: PathBuf,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&config_path.display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_output_section() {
        let rendered = render(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[output]"));
        assert!(rendered.contains("no_color = false"));
    }

    #[test]
    fn render_shows_stub_directory() {
        let mut config = AppConfig::default();
        config.stubs.path = Some(PathBuf::from("/srv/app/stubs"));
        assert!(render(&config).unwrap().contains("/srv/app/stubs"));
    }
}

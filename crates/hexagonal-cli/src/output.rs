//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;

use hexagonal_core::{application::InstallReporter, domain::RelativePath};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::for_terminal(args, config, io::stdout().is_terminal())
    }

    /// Piped or redirected stdout is never coloured.
    fn for_terminal(args: &GlobalArgs, config: &AppConfig, is_terminal: bool) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !is_terminal,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed detail line, indented under the previous message.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("   {msg}")
        } else {
            format!("   {}", msg.dimmed())
        };
        self.term.write_line(&line)
    }

}

/// Progress notices cannot fail the install; a broken stdout is logged.
fn report(result: io::Result<()>) {
    if let Err(e) = result {
        warn!(error = %e, "Failed to write progress notice");
    }
}

impl InstallReporter for OutputManager {
    fn directory_created(&mut self, path: &RelativePath) {
        report(self.print(&format!("Created: {path}")));
    }

    fn file_generated(&mut self, path: &RelativePath) {
        report(self.detail(&format!("Generated: {}", path.file_name())));
    }

    fn stub_missing(&mut self, stub: &str) {
        report(self.warning(&format!("Stub not found: {stub}")));
    }

    fn context_generated(&mut self) {
        report(self.info("AI context generated in .agent/rules/ and PROJECT_MEMORY.md"));
    }

    fn model_relocated(&mut self, destination: &RelativePath) {
        report(self.info(&format!("User model moved to {destination}")));
    }

    fn auth_config_patched(&mut self, path: &RelativePath) {
        report(self.print(&format!("{path} updated")));
    }

    fn manifest_patched(&mut self, path: &RelativePath) {
        report(self.info(&format!("{path} updated with the Src\\ autoload prefix")));
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            base_path: None,
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::for_terminal(&args(true, true), &AppConfig::default(), false);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn colour_follows_flag_and_terminal() {
        let config = AppConfig::default();
        assert!(!OutputManager::for_terminal(&args(false, false), &config, true).no_color);
        assert!(OutputManager::for_terminal(&args(false, true), &config, true).no_color);
        // Redirected output is plain.
        assert!(OutputManager::for_terminal(&args(false, false), &config, false).no_color);
    }

    #[test]
    fn config_can_disable_colour() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::for_terminal(&args(false, false), &config, true).no_color);
    }

    #[test]
    fn reporter_notices_do_not_panic() {
        let mut out = OutputManager::for_terminal(&args(true, true), &AppConfig::default(), false);
        let path = RelativePath::try_new(".agent/rules/01-architecture.md").unwrap();
        out.directory_created(&path);
        out.file_generated(&path);
        out.stub_missing("CODING_STANDARDS.stub");
        out.context_generated();
    }
}

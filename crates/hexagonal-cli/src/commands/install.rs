//! Implementation of the `hex:install` command.
//!
//! Responsibility: pick the adapters, build the `InstallContext` from
//! configuration, run the core install service and print the closing hint.
//! No business logic lives here.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info, instrument};

use hexagonal_adapters::{BundledStubStore, DirectoryStubStore, LocalFilesystem};
use hexagonal_core::{
    application::{InstallReport, InstallService, ports::StubStore},
    domain::InstallContext,
};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute `hex:install` against the project at `base`.
#[instrument(skip_all, fields(base = %base.display()))]
pub fn execute(base: &Path, config: AppConfig, mut output: OutputManager) -> CliResult<()> {
    let context = InstallContext::from_config(config.app.name.as_deref(), Local::now().date_naive());
    debug!(
        project = context.project_name(),
        date = %context.date(),
        "Install context resolved"
    );

    let service = InstallService::new(Box::new(LocalFilesystem::new()), stub_store(&config)?);

    output.header("Converting project to hexagonal architecture...")?;
    let report = service
        .install(base, &context, &mut output)
        .with_cli_context(|| "install")?;

    summarise(&report, &output)?;
    output.success("Done! Run \"composer dump-autoload\" to finish.")?;

    info!(
        directories = report.created_directories.len(),
        files = report.generated_files.len(),
        "hex:install finished"
    );
    Ok(())
}

/// Bundled stubs unless `stubs.path` points at a replacement set.
fn stub_store(config: &AppConfig) -> CliResult<Box<dyn StubStore>> {
    match &config.stubs.path {
        Some(path) => {
            let store = DirectoryStubStore::open(path).with_cli_context(|| "stub directory")?;
            debug!(
                path = %path.display(),
                available = ?store.names().unwrap_or_default(),
                "Using stub directory"
            );
            Ok(Box::new(store))
        }
        None => Ok(Box::new(BundledStubStore::new())),
    }
}

/// Mention what was skipped; created items were already reported live.
fn summarise(report: &InstallReport, output: &OutputManager) -> CliResult<()> {
    if report.created_directories.is_empty() {
        output.detail("Directory skeleton already present")?;
    }
    if !report.model_relocated() {
        output.detail("No app/Models/User.php to relocate")?;
    }
    if !report.manifest_patched {
        output.warning("No composer.json found; add \"Src\\\\\": \"src/\" to autoload.psr-4 yourself")?;
    }
    if !report.missing_stubs.is_empty() {
        output.warning(&format!(
            "{} context document(s) skipped: {}",
            report.missing_stubs.len(),
            report.missing_stubs.join(", ")
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::StubsConfig;

    #[test]
    fn bundled_store_by_default() {
        let store = stub_store(&AppConfig::default()).unwrap();
        assert!(store.get("PROJECT_MEMORY.stub").unwrap().is_some());
    }

    #[test]
    fn configured_directory_replaces_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("PROJECT_MEMORY.stub"), "# {{ PROJECT_NAME }}").unwrap();
        let config = AppConfig {
            stubs: StubsConfig {
                path: Some(tmp.path().to_path_buf()),
            },
            ..AppConfig::default()
        };

        let store = stub_store(&config).unwrap();
        assert_eq!(
            store.get("PROJECT_MEMORY.stub").unwrap().as_deref(),
            Some("# {{ PROJECT_NAME }}")
        );
        assert!(store.get("CODING_STANDARDS.stub").unwrap().is_none());
    }

    #[test]
    fn missing_stub_directory_is_a_configuration_error() {
        let config = AppConfig {
            stubs: StubsConfig {
                path: Some("/definitely/not/here".into()),
            },
            ..AppConfig::default()
        };
        let err = stub_store(&config).err().unwrap();
        assert_eq!(err.exit_code(), 4);
    }
}

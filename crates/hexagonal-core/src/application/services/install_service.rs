//! Install Service - the `hex:install` use case.
//!
//! Runs four steps, always in this order:
//! 1. Create the directory skeleton
//! 2. Publish the AI context documents from stubs
//! 3. Relocate the default user model (and patch `config/auth.php`)
//! 4. Register the `Src\` PSR-4 prefix in `composer.json`
//!
//! Missing optional inputs are skipped. Any port error aborts the remaining
//! steps; whatever was already written stays written.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, InstallReporter, StubStore},
    domain::{
        AUTH_CONFIG, AUTH_PROVIDER_REWRITE, CONTEXT_ARTIFACTS, DIRECTORY_MODE,
        DIRECTORY_SKELETON, InstallContext, MANIFEST, MODEL_RELOCATION, RelativePath,
        register_psr4_namespace,
    },
    error::HexResult,
};

/// What one install run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub created_directories: Vec<RelativePath>,
    pub generated_files: Vec<RelativePath>,
    pub missing_stubs: Vec<String>,
    pub model: Option<ModelRelocationOutcome>,
    pub manifest_patched: bool,
}

impl InstallReport {
    pub fn model_relocated(&self) -> bool {
        self.model.is_some()
    }
}

/// Outcome of the context-document step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedContext {
    pub generated: Vec<RelativePath>,
    pub missing_stubs: Vec<String>,
}

/// Outcome of a model move that actually happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelRelocationOutcome {
    /// `app/Models` was left empty and removed.
    pub source_dir_removed: bool,
    pub auth_config_patched: bool,
}

/// The installer.
pub struct InstallService {
    filesystem: Box<dyn Filesystem>,
    stubs: Box<dyn StubStore>,
}

impl InstallService {
    /// Create a new install service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, stubs: Box<dyn StubStore>) -> Self {
        Self { filesystem, stubs }
    }

    /// Run every step against the project at `base_path`.
    #[instrument(
        skip_all,
        fields(
            base_path = %base_path.as_ref().display(),
            project = %context.project_name()
        )
    )]
    pub fn install(
        &self,
        base_path: impl AsRef<Path>,
        context: &InstallContext,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<InstallReport> {
        let base = base_path.as_ref();
        info!("Converting project to hexagonal layout");

        let created_directories = self.create_directories(base, reporter)?;
        let context_docs = self.generate_context(base, context, reporter)?;
        let model = self.relocate_default_model(base, reporter)?;
        let manifest_patched = self.register_autoload(base, reporter)?;

        let report = InstallReport {
            created_directories,
            generated_files: context_docs.generated,
            missing_stubs: context_docs.missing_stubs,
            model,
            manifest_patched,
        };

        info!(
            directories = report.created_directories.len(),
            files = report.generated_files.len(),
            model_relocated = report.model_relocated(),
            manifest_patched = report.manifest_patched,
            "Install completed"
        );
        Ok(report)
    }

    /// Create every skeleton directory that is not already present.
    #[instrument(skip_all)]
    pub fn create_directories(
        &self,
        base: &Path,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<Vec<RelativePath>> {
        let mut created = Vec::new();

        for dir in DIRECTORY_SKELETON {
            let relative = RelativePath::try_new(dir)?;
            let path = relative.resolve(base);

            if self.filesystem.is_dir(&path) {
                debug!(dir, "Directory exists, skipping");
                continue;
            }

            self.filesystem.create_dir_all(&path, DIRECTORY_MODE)?;
            reporter.directory_created(&relative);
            created.push(relative);
        }

        Ok(created)
    }

    /// Render each context stub into the project. Missing stubs are skipped
    /// with a warning; existing destination files are overwritten.
    #[instrument(skip_all, fields(project = %context.project_name()))]
    pub fn generate_context(
        &self,
        base: &Path,
        context: &InstallContext,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<GeneratedContext> {
        let render_context = context.render_context();
        let mut outcome = GeneratedContext::default();

        for artifact in CONTEXT_ARTIFACTS {
            let Some(stub) = self.stubs.get(artifact.stub)? else {
                debug!(stub = artifact.stub, "Stub not found, skipping");
                reporter.stub_missing(artifact.stub);
                outcome.missing_stubs.push(artifact.stub.to_owned());
                continue;
            };

            let relative = RelativePath::try_new(artifact.destination)?;
            let path = relative.resolve(base);
            self.ensure_parent(&path)?;
            self.filesystem
                .write_file(&path, &render_context.render(&stub))?;

            reporter.file_generated(&relative);
            outcome.generated.push(relative);
        }

        reporter.context_generated();
        Ok(outcome)
    }

    /// Move `app/Models/User.php` into the persistence layer, rewriting its
    /// namespace, then patch `config/auth.php`.
    ///
    /// Returns `None` without touching anything when the model is absent,
    /// which is the case on every run after the first.
    #[instrument(skip_all)]
    pub fn relocate_default_model(
        &self,
        base: &Path,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<Option<ModelRelocationOutcome>> {
        let source = RelativePath::try_new(MODEL_RELOCATION.source)?.resolve(base);
        if !self.filesystem.is_file(&source) {
            debug!(source = %source.display(), "No default model to relocate");
            return Ok(None);
        }

        let destination = RelativePath::try_new(MODEL_RELOCATION.destination)?;
        let dest_path = destination.resolve(base);

        let content = self.filesystem.read_to_string(&source)?;
        if !MODEL_RELOCATION.namespace.matches(&content) {
            warn!(
                expected = MODEL_RELOCATION.namespace.from,
                "Model namespace not found; moving file unchanged"
            );
        }
        let content = MODEL_RELOCATION.namespace.apply(&content);

        self.ensure_parent(&dest_path)?;
        self.filesystem.write_file(&dest_path, &content)?;
        self.filesystem.remove_file(&source)?;

        let models_dir = RelativePath::try_new(MODEL_RELOCATION.source_dir)?.resolve(base);
        let source_dir_removed = self.filesystem.is_dir(&models_dir)
            && self.filesystem.is_empty_dir(&models_dir)?;
        if source_dir_removed {
            self.filesystem.remove_dir(&models_dir)?;
        }

        info!(destination = %destination, "Default model relocated");
        reporter.model_relocated(&destination);

        let auth_config_patched = self.patch_auth_config(base, reporter)?;

        Ok(Some(ModelRelocationOutcome {
            source_dir_removed,
            auth_config_patched,
        }))
    }

    /// Point the auth provider at the relocated model class. Returns
    /// `false` when `config/auth.php` does not exist.
    #[instrument(skip_all)]
    pub fn patch_auth_config(
        &self,
        base: &Path,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<bool> {
        let relative = RelativePath::try_new(AUTH_CONFIG)?;
        let path = relative.resolve(base);
        if !self.filesystem.exists(&path) {
            debug!("No auth config to patch");
            return Ok(false);
        }

        let content = self.filesystem.read_to_string(&path)?;
        self.filesystem
            .write_file(&path, &AUTH_PROVIDER_REWRITE.apply(&content))?;

        reporter.auth_config_patched(&relative);
        Ok(true)
    }

    /// Register `Src\` → `src/` in `composer.json`. Returns `false` when the
    /// manifest does not exist.
    #[instrument(skip_all)]
    pub fn register_autoload(
        &self,
        base: &Path,
        reporter: &mut dyn InstallReporter,
    ) -> HexResult<bool> {
        let relative = RelativePath::try_new(MANIFEST)?;
        let path = relative.resolve(base);
        if !self.filesystem.exists(&path) {
            debug!("No composer.json to patch");
            return Ok(false);
        }

        let manifest = self.filesystem.read_to_string(&path)?;
        let patched = register_psr4_namespace(&manifest)?;
        self.filesystem.write_file(&path, &patched)?;

        reporter.manifest_patched(&relative);
        Ok(true)
    }

    fn ensure_parent(&self, path: &Path) -> HexResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.filesystem.is_dir(parent) => {
                self.filesystem.create_dir_all(parent, DIRECTORY_MODE)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockStubStore, NullReporter},
    };
    use crate::error::HexError;

    fn context() -> InstallContext {
        InstallContext::new("Acme", NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
    }

    #[derive(Default)]
    struct Recorder {
        created: Vec<String>,
        missing: Vec<String>,
        context_done: bool,
    }

    impl InstallReporter for Recorder {
        fn directory_created(&mut self, path: &RelativePath) {
            self.created.push(path.to_string());
        }
        fn stub_missing(&mut self, stub: &str) {
            self.missing.push(stub.to_owned());
        }
        fn context_generated(&mut self) {
            self.context_done = true;
        }
    }

    #[test]
    fn existing_directories_are_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();

        let service = InstallService::new(Box::new(fs), Box::new(MockStubStore::new()));
        let mut reporter = Recorder::default();
        let created = service
            .create_directories(Path::new("/app"), &mut reporter)
            .unwrap();

        assert!(created.is_empty());
        assert!(reporter.created.is_empty());
    }

    #[test]
    fn directories_are_created_with_0755() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all()
            .with(always(), eq(0o755_u32))
            .times(DIRECTORY_SKELETON.len())
            .returning(|_, _| Ok(()));

        let service = InstallService::new(Box::new(fs), Box::new(MockStubStore::new()));
        let mut reporter = Recorder::default();
        let created = service
            .create_directories(Path::new("/app"), &mut reporter)
            .unwrap();

        assert_eq!(created.len(), DIRECTORY_SKELETON.len());
        assert_eq!(reporter.created[0], "src/Domain/Entities");
    }

    #[test]
    fn directory_failure_aborts_install() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        // Nothing past the first step may run.
        fs.expect_write_file().never();
        let mut stubs = MockStubStore::new();
        stubs.expect_get().never();

        let service = InstallService::new(Box::new(fs), Box::new(stubs));
        let err = service
            .install("/app", &context(), &mut NullReporter)
            .unwrap_err();

        assert!(matches!(
            err,
            HexError::Application(ApplicationError::FilesystemError { ref path, .. })
                if path == &PathBuf::from("/app/src/Domain/Entities")
        ));
    }

    #[test]
    fn missing_stub_is_skipped_with_notice() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_write_file()
            .times(CONTEXT_ARTIFACTS.len() - 1)
            .returning(|_, _| Ok(()));

        let mut stubs = MockStubStore::new();
        stubs.expect_get().returning(|name| {
            Ok((name != "CODING_STANDARDS.stub").then(|| format!("{name}: {{{{ PROJECT_NAME }}}}")))
        });

        let service = InstallService::new(Box::new(fs), Box::new(stubs));
        let mut reporter = Recorder::default();
        let outcome = service
            .generate_context(Path::new("/app"), &context(), &mut reporter)
            .unwrap();

        assert_eq!(outcome.generated.len(), 3);
        assert_eq!(outcome.missing_stubs, ["CODING_STANDARDS.stub"]);
        assert_eq!(reporter.missing, ["CODING_STANDARDS.stub"]);
        assert!(reporter.context_done);
    }

    #[test]
    fn stub_content_is_rendered_before_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("PROJECT_MEMORY.md") && content == "# Acme (2026-01-02)"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut stubs = MockStubStore::new();
        stubs
            .expect_get()
            .returning(|_| Ok(Some("# {{ PROJECT_NAME }} ({{ DATE }})".into())));

        let service = InstallService::new(Box::new(fs), Box::new(stubs));
        service
            .generate_context(Path::new("/app"), &context(), &mut NullReporter)
            .unwrap();
    }

    #[test]
    fn absent_model_skips_relocation_and_auth_patch() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().return_const(false);
        fs.expect_exists().never();
        fs.expect_read_to_string().never();

        let service = InstallService::new(Box::new(fs), Box::new(MockStubStore::new()));
        let outcome = service
            .relocate_default_model(Path::new("/app"), &mut NullReporter)
            .unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn absent_manifest_is_not_patched() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file().never();

        let service = InstallService::new(Box::new(fs), Box::new(MockStubStore::new()));
        assert!(
            !service
                .register_autoload(Path::new("/app"), &mut NullReporter)
                .unwrap()
        );
    }
}

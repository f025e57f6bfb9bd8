//! Core domain layer for the installer.
//!
//! Pure logic with no I/O: the target layout, placeholder rendering, literal
//! source rewrites and the `composer.json` autoload patch. Everything that
//! touches the disk goes through the ports in `crate::application`.

pub mod common;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod render;
pub mod rewrite;

pub use common::{DIRECTORY_MODE, RelativePath};
pub use error::DomainError;
pub use layout::{CONTEXT_ARTIFACTS, ContextArtifact, DIRECTORY_SKELETON};
pub use manifest::{MANIFEST, PSR4_NAMESPACE, PSR4_PATH, register_psr4_namespace};
pub use render::{DEFAULT_PROJECT_NAME, InstallContext, RenderContext};
pub use rewrite::{
    AUTH_CONFIG, AUTH_PROVIDER_REWRITE, LiteralRewrite, MODEL_RELOCATION, ModelRelocation,
};

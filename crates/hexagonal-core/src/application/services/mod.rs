//! Application services - orchestrate use cases.

pub mod install_service;

pub use install_service::{
    GeneratedContext, InstallReport, InstallService, ModelRelocationOutcome,
};

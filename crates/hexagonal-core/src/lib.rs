//! Hexagonal Core - Laravel hexagonal-layout installer
//!
//! This crate provides the domain and application layers for the `hexagonal`
//! installer, which converts a Laravel project into a ports-and-adapters
//! layout in a single run.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          hexagonal-cli (CLI)            │
//! │   (registers and drives hex:install)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (InstallService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Filesystem, StubStore, Reporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   hexagonal-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BundledStubStore, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (layout, rendering, rewrites, manifest) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hexagonal_core::prelude::*;
//!
//! let service = InstallService::new(filesystem, stubs);
//! let today = chrono::Local::now().date_naive();
//! let context = InstallContext::from_config(Some("Acme"), today);
//! let report = service.install("/path/to/laravel", &context, &mut reporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InstallReport, InstallService,
        ports::{Filesystem, InstallReporter, NullReporter, StubStore},
        registration::{CommandRegistry, CommandSpec, INSTALL_COMMAND, RunMode},
    };
    pub use crate::domain::{InstallContext, RenderContext};
    pub use crate::error::{HexError, HexResult};
}

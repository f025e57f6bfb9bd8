//! Application layer for the installer.
//!
//! This layer contains:
//! - **Services**: the install use case ([`InstallService`])
//! - **Ports**: traits for the filesystem, the stub store and progress output
//! - **Registration**: which commands a host exposes, and when
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain rules against the ports. The
//! rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod registration;
pub mod services;

pub use services::{InstallReport, InstallService};

pub use ports::{Filesystem, InstallReporter, NullReporter, StubStore};

pub use error::ApplicationError;

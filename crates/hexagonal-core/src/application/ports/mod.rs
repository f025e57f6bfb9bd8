//! Application ports (traits) for external dependencies.
//!
//! All ports here are **driven** (output) ports: the install service calls
//! them and `hexagonal-adapters` / `hexagonal-cli` implement them.
//!
//! - `Filesystem`: directory and file operations under the project root
//! - `StubStore`: lookup of template stubs by name
//! - `InstallReporter`: progress notices for the user

pub mod output;

pub use output::{Filesystem, InstallReporter, NullReporter, StubStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockStubStore};

//! The target layout: which directories exist and which context documents
//! are published where.

/// Directories created under the project root, in creation order.
pub const DIRECTORY_SKELETON: [&str; 22] = [
    // Domain: entities, value objects and repository contracts
    "src/Domain/Entities",
    "src/Domain/ValueObjects",
    "src/Domain/Repositories",
    "src/Domain/Events",
    "src/Domain/Exceptions",
    "src/Domain/Services",
    // Application: use cases split into writes and reads
    "src/Application/UseCases/Commands",
    "src/Application/UseCases/Queries",
    "src/Application/DTOs",
    "src/Application/Interfaces",
    "src/Application/Services",
    // Infrastructure: persistence
    "src/Infrastructure/Persistence/Eloquent/Models",
    "src/Infrastructure/Persistence/Eloquent/Repositories",
    // Tests mirror the layers
    "tests/Unit/Domain",
    "tests/Unit/Application",
    "tests/Integration/Infrastructure",
    // Infrastructure: HTTP entry points
    "src/Infrastructure/Http/Controllers",
    "src/Infrastructure/Http/Requests",
    "src/Infrastructure/Http/Resources",
    "src/Infrastructure/Http/Middleware",
    "src/Infrastructure/Services",
    "src/Infrastructure/Providers",
];

/// A stub published into the project as an AI-assistant context document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextArtifact {
    /// File name inside the stub store.
    pub stub: &'static str,
    /// Destination relative to the project root.
    pub destination: &'static str,
}

/// Context documents, in publishing order.
///
/// The three rule files are static and live in a hidden directory; the
/// project memory sits at the root so it stays visible.
pub const CONTEXT_ARTIFACTS: [ContextArtifact; 4] = [
    ContextArtifact {
        stub: "antigravityrules.stub",
        destination: ".agent/rules/00-core-behavior.md",
    },
    ContextArtifact {
        stub: "ARCHITECTURE_CONTEXT.stub",
        destination: ".agent/rules/01-architecture.md",
    },
    ContextArtifact {
        stub: "CODING_STANDARDS.stub",
        destination: ".agent/rules/02-coding-style.md",
    },
    ContextArtifact {
        stub: "PROJECT_MEMORY.stub",
        destination: "PROJECT_MEMORY.md",
    },
];

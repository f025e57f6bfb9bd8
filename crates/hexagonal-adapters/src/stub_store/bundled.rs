//! Stubs compiled into the binary.

use hexagonal_core::{application::ports::StubStore, error::HexResult};

/// `(name, content)` for every bundled stub, sorted by name.
const BUNDLED: [(&str, &str); 4] = [
    (
        "ARCHITECTURE_CONTEXT.stub",
        include_str!("../../stubs/ARCHITECTURE_CONTEXT.stub"),
    ),
    (
        "CODING_STANDARDS.stub",
        include_str!("../../stubs/CODING_STANDARDS.stub"),
    ),
    (
        "PROJECT_MEMORY.stub",
        include_str!("../../stubs/PROJECT_MEMORY.stub"),
    ),
    (
        "antigravityrules.stub",
        include_str!("../../stubs/antigravityrules.stub"),
    ),
];

/// The default stub set shipped with the installer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStubStore;

impl BundledStubStore {
    pub fn new() -> Self {
        Self
    }

    /// Iterate over every bundled stub.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        BUNDLED.into_iter()
    }
}

impl StubStore for BundledStubStore {
    fn get(&self, name: &str) -> HexResult<Option<String>> {
        Ok(BUNDLED
            .iter()
            .find(|(stub, _)| *stub == name)
            .map(|(_, content)| (*content).to_owned()))
    }

    fn names(&self) -> HexResult<Vec<String>> {
        Ok(BUNDLED.iter().map(|(name, _)| (*name).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use hexagonal_core::domain::CONTEXT_ARTIFACTS;

    use super::*;

    #[test]
    fn every_context_artifact_has_a_bundled_stub() {
        let store = BundledStubStore::new();
        for artifact in CONTEXT_ARTIFACTS {
            assert!(
                store.get(artifact.stub).unwrap().is_some(),
                "missing {}",
                artifact.stub
            );
        }
    }

    #[test]
    fn project_memory_uses_both_placeholders() {
        let memory = BundledStubStore::new()
            .get("PROJECT_MEMORY.stub")
            .unwrap()
            .unwrap();
        assert!(memory.contains("{{ PROJECT_NAME }}"));
        assert!(memory.contains("{{ DATE }}"));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(BundledStubStore::new().get("README.stub").unwrap(), None);
    }
}
